pub mod card;
pub mod layout;
pub mod quiz;

pub use layout::{page, titled};

use maud::Markup;

/// Full page for plain navigation, bare fragment for htmx swaps.
pub fn render(is_htmx: bool, title: &str, body: Markup) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body)
    }
}
