//! Curators' ratings board for the art collections.

use is_api_types::ItemKind;
use is_storefront_core::NoticeKind;
use is_storefront_core::ratings::{MAX_SCORE, MIN_SCORE, RatedFilter, RatingSort, board};
use is_storefront_core::{Rater, Ratings};

use crate::html::{self, escape};
use crate::state::{self, AppState};

fn kind_id(kind: Option<ItemKind>) -> &'static str {
    kind.map_or("all", ItemKind::as_str)
}

fn parse_kind(id: &str) -> Option<ItemKind> {
    match id {
        "painting" => Some(ItemKind::Painting),
        "print" => Some(ItemKind::Print),
        _ => None,
    }
}

fn filter_id(filter: RatedFilter) -> &'static str {
    match filter {
        RatedFilter::All => "all",
        RatedFilter::Rated => "rated",
        RatedFilter::Unrated => "unrated",
    }
}

fn parse_filter(id: &str) -> RatedFilter {
    match id {
        "rated" => RatedFilter::Rated,
        "unrated" => RatedFilter::Unrated,
        _ => RatedFilter::All,
    }
}

/// Apply a board control. Returns `false` for names this page does not own.
pub fn set_control(name: &str, value: &str) -> bool {
    state::with_mut(|s| {
        let view = &mut s.ratings_view;
        match name {
            "rating-type" => view.kind = parse_kind(value),
            "rating-filter" => view.filter = parse_filter(value),
            "rating-sort" => view.sort = value.parse().unwrap_or_default(),
            _ => return false,
        }
        true
    })
}

pub fn rate(code: &str, rater: &str, score: &str) {
    let now = state::now_ms();
    state::with_mut(|s| {
        let result = rater
            .parse::<Rater>()
            .and_then(|rater| {
                let score = score.parse::<u8>().unwrap_or(0);
                s.front.rate(code, rater, score)
            });
        if let Err(err) = result {
            gloo_console::warn!(format!("rating {code}: {err}"));
            s.front.notify(NoticeKind::Error, err.to_string(), now);
        }
    });
}

pub fn reset() {
    let confirmed = crate::dom::window()
        .confirm_with_message("Clear every rating on this device?")
        .unwrap_or(false);
    if confirmed {
        state::with_mut(|s| s.front.reset_ratings());
    }
}

fn select(name: &str, label: &str, options: &[(String, String)], current: &str) -> String {
    let opts: String = options
        .iter()
        .map(|(id, text)| {
            format!(
                r#"<option value="{id}"{}>{}</option>"#,
                if id == current { " selected" } else { "" },
                escape(text)
            )
        })
        .collect();
    format!(r#"<select data-filter="{name}" aria-label="{label}">{opts}</select>"#)
}

fn score_buttons(ratings: &Ratings, code: &str, rater: Rater) -> String {
    let current = ratings.score(code, rater);
    (MIN_SCORE..=MAX_SCORE)
        .map(|score| {
            format!(
                r#"<button class="score{}" data-action="rate" data-code="{code}" data-rater="{}" data-score="{score}">{score}</button>"#,
                if current == Some(score) { " active" } else { "" },
                rater.id()
            )
        })
        .collect()
}

pub fn page(s: &AppState) -> String {
    let view = s.ratings_view;
    let ratings = s.front.ratings();
    let rows: String = board(ratings, view.kind, view.filter, view.sort)
        .into_iter()
        .map(|art| {
            let raters: String = Rater::ALL
                .iter()
                .map(|rater| {
                    format!(
                        r#"<td class="scores"><span class="rater">{}</span>{}</td>"#,
                        rater.name(),
                        score_buttons(ratings, art.code, *rater)
                    )
                })
                .collect();
            let average = ratings
                .average(art.code)
                .map(|avg| format!("{avg:.1}"))
                .unwrap_or_else(|| "–".to_owned());
            let difference = ratings
                .difference(art.code)
                .map(|d| d.to_string())
                .unwrap_or_else(|| "–".to_owned());
            format!(
                r#"<tr>
  <td><a href="/art/{code}" data-link="/art/{code}">{image}</a></td>
  <td><strong>{code}</strong><br>{title}</td>
  {raters}
  <td class="avg">{average}</td>
  <td class="diff">{difference}</td>
</tr>"#,
                code = art.code,
                image = html::img(art.image, art.title, "rating-thumb"),
                title = escape(art.title),
            )
        })
        .collect();

    let kinds = vec![
        ("all".to_owned(), "All artworks".to_owned()),
        ("painting".to_owned(), "Paintings".to_owned()),
        ("print".to_owned(), "Prints".to_owned()),
    ];
    let filters = vec![
        ("all".to_owned(), "All".to_owned()),
        ("rated".to_owned(), "Rated".to_owned()),
        ("unrated".to_owned(), "Unrated".to_owned()),
    ];
    let sorts: Vec<(String, String)> = RatingSort::options()
        .into_iter()
        .map(|sort| (sort.id(), sort.label()))
        .collect();

    format!(
        r#"<header class="page-head"><h1>Ratings</h1><p>{rated} of {total} artworks rated</p></header>
<div class="filter-bar">
  {kind}
  {filter}
  {sort}
  <button class="btn btn-ghost" data-action="reset-ratings">Reset all</button>
</div>
<table class="ratings-table">
  <thead><tr><th></th><th>Artwork</th>{heads}<th>Avg</th><th>Diff</th></tr></thead>
  <tbody>{rows}</tbody>
</table>"#,
        rated = ratings.rated_count(),
        total = is_catalog::PAINTINGS.len() + is_catalog::PRINTS.len(),
        kind = select("rating-type", "Type", &kinds, kind_id(view.kind)),
        filter = select("rating-filter", "Show", &filters, filter_id(view.filter)),
        sort = select("rating-sort", "Sort", &sorts, &view.sort.id()),
        heads = Rater::ALL
            .iter()
            .map(|r| format!("<th>{}</th>", r.name()))
            .collect::<String>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_ids_round_trip() {
        for kind in [None, Some(ItemKind::Painting), Some(ItemKind::Print)] {
            assert_eq!(parse_kind(kind_id(kind)), kind);
        }
        for filter in [RatedFilter::All, RatedFilter::Rated, RatedFilter::Unrated] {
            assert_eq!(parse_filter(filter_id(filter)), filter);
        }
    }

    #[test]
    fn active_score_is_marked() {
        let mut ratings = Ratings::default();
        ratings.rate("OP3", Rater::Aly, 7).unwrap();
        let markup = score_buttons(&ratings, "OP3", Rater::Aly);
        assert!(markup.contains(r#"class="score active" data-action="rate" data-code="OP3" data-rater="aly" data-score="7""#));
        assert_eq!(markup.matches("score active").count(), 1);
        assert!(!score_buttons(&ratings, "OP3", Rater::Mohamad).contains("active"));
    }
}
