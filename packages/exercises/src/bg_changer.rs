//! A page whose background switches color when one of its buttons is clicked.

use domkit_core::ElementDescription;
use std::str::FromStr;

/// The background the page starts with.
pub const INITIAL_BACKGROUND: &str = "bg-zinc-900";

/// The colors there is a button for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    White,
}

impl Color {
    /// Every color, in the order the buttons appear.
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::White,
    ];

    /// The `id` of the color's button.
    pub fn id(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::White => "white",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::White => "White",
        }
    }

    /// The background class the page switches to.
    pub fn background(self) -> &'static str {
        match self {
            Color::Red => "bg-red-500",
            Color::Blue => "bg-blue-500",
            Color::Green => "bg-green-500",
            Color::Yellow => "bg-yellow-500",
            Color::White => "bg-white",
        }
    }

    /// The swatch class of the button itself. The red button uses a rose swatch.
    fn swatch(self) -> &'static str {
        match self {
            Color::Red => "bg-rose-500",
            other => other.background(),
        }
    }
}

/// A button id that does not belong to any color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no color button has the id `{0}`")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|color| color.id() == id)
            .ok_or_else(|| UnknownColor(id.to_string()))
    }
}

/// The page state: just the current background class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BgChanger {
    pub background: &'static str,
}

impl Default for BgChanger {
    fn default() -> Self {
        Self {
            background: INITIAL_BACKGROUND,
        }
    }
}

/// Something the user did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A button with this `id` was clicked.
    ButtonClicked { id: String },
}

/// Apply `event` to `state`. Clicks on ids that are not colors change nothing.
pub fn update(state: BgChanger, event: Event) -> BgChanger {
    match event {
        Event::ButtonClicked { id } => match id.parse::<Color>() {
            Ok(color) => {
                tracing::debug!(color = color.id(), "switching background");
                BgChanger {
                    background: color.background(),
                }
            }
            Err(err) => {
                tracing::debug!(%err, "ignoring click");
                state
            }
        },
    }
}

pub fn view(state: &BgChanger) -> ElementDescription {
    let buttons = Color::ALL.into_iter().map(|color| {
        ElementDescription::new("button")
            .attr("id", color.id())
            .attr("class", format!("{} px-4 py-2 rounded-lg", color.swatch()))
            .text(color.label())
    });

    ElementDescription::new("div")
        .attr("class", state.background)
        .child(
            ElementDescription::new("div")
                .attr(
                    "class",
                    "min-h-screen flex flex-col justify-between items-center p-5",
                )
                .child(
                    ElementDescription::new("h1")
                        .attr("class", "text-6xl font-bold text-zinc-800")
                        .text("Background Color Changer"),
                )
                .child(
                    ElementDescription::new("div")
                        .attr(
                            "class",
                            "bg-zinc-800 flex justify-between gap-3 px-3 py-2 rounded-lg font-semibold",
                        )
                        .children(buttons),
                ),
        )
}
