use is_api_types::{CartLine, ContactDetails, OrderTotals};
use is_catalog::{Painting, Print, PrintSelection, Product};

pub const WHATSAPP_NUMBER: &str = "96181773588";
pub const REFERENCE_PREFIX: &str = "INS-";

/// Builds the link that hands a message to an external messaging channel.
///
/// The link is opened as-is; nothing here parses or validates it.
pub trait Handoff {
    fn channel(&self) -> &str;
    fn link(&self, message: &str) -> String;
}

/// `wa.me` deep links.
///
/// Reads `INSTYLE_WHATSAPP` from environment at construction time
/// (default: the store's business number).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsApp {
    phone: String,
}

impl Default for WhatsApp {
    fn default() -> Self {
        Self::new(None)
    }
}

impl WhatsApp {
    pub fn new(phone: Option<String>) -> Self {
        let phone = phone
            .or_else(|| std::env::var("INSTYLE_WHATSAPP").ok())
            .unwrap_or_else(|| WHATSAPP_NUMBER.to_string());
        Self {
            phone: phone.chars().filter(char::is_ascii_digit).collect(),
        }
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

impl Handoff for WhatsApp {
    fn channel(&self) -> &str {
        "whatsapp"
    }

    fn link(&self, message: &str) -> String {
        format!("https://wa.me/{}?text={}", self.phone, urlencoding::encode(message))
    }
}

/// Whole dollars with thousands separators: `1450` → `1,450`.
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn base36_upper(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if value == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();
    String::from_utf8_lossy(&buf).into_owned()
}

/// Order reference derived from the wall clock: `INS-` plus the epoch millis
/// in upper-case base 36. Distinct per millisecond, not globally unique.
pub fn reference_token(now_ms: u64) -> String {
    format!("{REFERENCE_PREFIX}{}", base36_upper(now_ms))
}

pub fn order_message(
    lines: &[CartLine],
    details: &ContactDetails,
    totals: &OrderTotals,
    reference: &str,
) -> String {
    let mut msg = String::new();
    msg.push_str("🛒 *New Order from InStyle Website*\n\n");

    msg.push_str("👤 *Customer Details:*\n");
    msg.push_str(&format!("Name: {}\n", details.full_name()));
    msg.push_str(&format!("Phone: {}\n", details.phone.trim()));
    msg.push_str(&format!(
        "Address: {}, {}\n",
        details.address.trim(),
        details.city.trim()
    ));
    let notes = details.notes.trim();
    if !notes.is_empty() {
        msg.push_str(&format!("Notes: {notes}\n"));
    }

    msg.push_str("\n📦 *Order Items:*\n");
    for line in lines {
        msg.push_str(&format!(
            "• {} (Qty: {}) - ${}\n",
            line.item.name,
            line.quantity,
            format_usd(line.line_total())
        ));
    }

    msg.push_str("\n💰 *Order Summary:*\n");
    msg.push_str(&format!("Subtotal: ${}\n", format_usd(totals.subtotal)));
    if totals.shipping == 0 {
        msg.push_str("Shipping: Free\n");
    } else {
        msg.push_str(&format!("Shipping: ${}\n", format_usd(totals.shipping)));
    }
    msg.push_str(&format!("*Total: ${}*\n", format_usd(totals.total)));

    msg.push_str(&format!("\nOrder Reference: {reference}"));
    msg
}

pub fn product_inquiry(product: &Product) -> String {
    format!(
        "Hi! I'm interested in \"{}\" ({}). Can you tell me more about pricing and availability?",
        product.name, product.category
    )
}

pub fn painting_inquiry(painting: &Painting) -> String {
    format!(
        "Hi! I'm interested in \"{}\" ({}) - {} - Price: ${}. Can you tell me more?",
        painting.title,
        painting.code,
        painting.dimensions_label(),
        format_usd(painting.price)
    )
}

pub fn print_inquiry(print: &Print, selection: &PrintSelection) -> String {
    format!(
        "Hi! I'm interested in \"{}\" ({})\n\n📐 Size: {}\n🖼️ Frame: {}\n✨ Glass: {}\n💰 Price: ${}\n\nCan I place an order?",
        print.title,
        print.code,
        selection.size.label,
        selection.frame,
        selection.glass.short_label(),
        format_usd(selection.price())
    )
}

/// Everything the terminal checkout action needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderHandoff {
    pub reference: String,
    pub message: String,
    pub url: String,
}

pub fn prepare_order<H: Handoff + ?Sized>(
    handoff: &H,
    lines: &[CartLine],
    details: &ContactDetails,
    totals: &OrderTotals,
    now_ms: u64,
) -> OrderHandoff {
    let reference = reference_token(now_ms);
    let message = order_message(lines, details, totals, &reference);
    let url = handoff.link(&message);
    tracing::debug!(
        channel = handoff.channel(),
        reference = %reference,
        lines = lines.len(),
        "prepared order handoff"
    );
    OrderHandoff {
        reference,
        message,
        url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_api_types::ItemSummary;
    use is_catalog::{find_painting, find_print, find_product};

    fn line(code: u32, name: &str, price: u64, quantity: u32) -> CartLine {
        CartLine {
            item: ItemSummary {
                key: is_api_types::ItemKey::product(code),
                name: name.into(),
                price,
                image: String::new(),
                category: String::new(),
            },
            quantity,
        }
    }

    fn details(notes: &str) -> ContactDetails {
        ContactDetails {
            first_name: "Rima".into(),
            last_name: "Haddad".into(),
            phone: "+961 3 123 456".into(),
            address: "Rue Gouraud".into(),
            city: "Beirut".into(),
            notes: notes.into(),
        }
    }

    #[test]
    fn usd_grouping() {
        assert_eq!(format_usd(0), "0");
        assert_eq!(format_usd(999), "999");
        assert_eq!(format_usd(1450), "1,450");
        assert_eq!(format_usd(1_234_567), "1,234,567");
    }

    #[test]
    fn reference_is_base36_of_the_clock() {
        assert_eq!(reference_token(0), "INS-0");
        assert_eq!(reference_token(35), "INS-Z");
        assert_eq!(reference_token(36), "INS-10");
        assert_eq!(reference_token(1_700_000_000_000), "INS-LOYW3V28");
        assert_ne!(reference_token(1), reference_token(2));
    }

    #[test]
    fn order_message_layout() {
        let lines = vec![line(1001, "Walk-in Wardrobe", 725, 2), line(2003, "TV Board", 99, 1)];
        let totals = OrderTotals {
            subtotal: 1549,
            shipping: 0,
            total: 1549,
        };
        let msg = order_message(&lines, &details(""), &totals, "INS-ABC");

        assert!(msg.starts_with("🛒 *New Order from InStyle Website*\n\n👤 *Customer Details:*\n"));
        assert!(msg.contains("Name: Rima Haddad\n"));
        assert!(msg.contains("Address: Rue Gouraud, Beirut\n"));
        assert!(!msg.contains("Notes:"));
        assert!(msg.contains("• Walk-in Wardrobe (Qty: 2) - $1,450\n"));
        assert!(msg.contains("• TV Board (Qty: 1) - $99\n"));
        assert!(msg.contains("Subtotal: $1,549\nShipping: Free\n*Total: $1,549*\n"));
        assert!(msg.ends_with("Order Reference: INS-ABC"));
    }

    #[test]
    fn notes_and_paid_shipping_appear() {
        let lines = vec![line(7001, "Velvet Chair", 120, 1)];
        let totals = OrderTotals {
            subtotal: 120,
            shipping: 50,
            total: 170,
        };
        let msg = order_message(&lines, &details("  Call before delivery "), &totals, "INS-1");
        assert!(msg.contains("Notes: Call before delivery\n"));
        assert!(msg.contains("Shipping: $50\n"));
        assert!(msg.contains("*Total: $170*"));
    }

    #[test]
    fn whatsapp_link_percent_encodes_the_message() {
        let wa = WhatsApp::new(Some("+961 81 773 588".into()));
        assert_eq!(wa.phone(), "96181773588");
        let url = wa.link("Hi! a&b\n💰");
        assert!(url.starts_with("https://wa.me/96181773588?text="));
        let encoded = url.split_once("?text=").unwrap().1;
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('\n'));
        assert!(!encoded.contains('&'));
        assert_eq!(urlencoding::decode(encoded).unwrap(), "Hi! a&b\n💰");
    }

    #[test]
    fn inquiry_texts() {
        let product = find_product(7001).unwrap();
        assert_eq!(
            product_inquiry(product),
            "Hi! I'm interested in \"Velvet Chair\" (Chairs). Can you tell me more about pricing and availability?"
        );

        let painting = find_painting("OP17").unwrap();
        assert_eq!(
            painting_inquiry(painting),
            "Hi! I'm interested in \"African Muse\" (OP17) - 50×70cm - Price: $125. Can you tell me more?"
        );

        let print = find_print("PR1").unwrap();
        let selection = PrintSelection::parse("a2", "anti-reflection", "walnut").unwrap();
        let text = print_inquiry(print, &selection);
        assert!(text.starts_with("Hi! I'm interested in \"Morning Moka\" (PR1)\n\n"));
        assert!(text.contains("📐 Size: 42 × 59.4 cm\n"));
        assert!(text.contains("🖼️ Frame: Walnut\n"));
        assert!(text.contains("✨ Glass: Anti-Reflection\n"));
        assert!(text.contains("💰 Price: $49\n\nCan I place an order?"));
    }

    #[test]
    fn prepare_order_ties_reference_message_and_link() {
        let wa = WhatsApp::new(Some(WHATSAPP_NUMBER.into()));
        let lines = vec![line(1001, "Walk-in Wardrobe", 725, 1)];
        let totals = OrderTotals {
            subtotal: 725,
            shipping: 0,
            total: 725,
        };
        let handoff = prepare_order(&wa, &lines, &details(""), &totals, 36);
        assert_eq!(handoff.reference, "INS-10");
        assert!(handoff.message.ends_with("Order Reference: INS-10"));
        assert_eq!(handoff.url, wa.link(&handoff.message));
    }
}
