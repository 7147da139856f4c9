//! A headless, in-memory stand-in for the browser DOM.
//!
//! [`Document`] implements [`domkit_core::WriteTree`], so descriptions can be rendered into it
//! with [`domkit_core::render`] and inspected afterwards without a browser.
//!
//! ```rust
//! use domkit_core::{render, ElementDescription};
//! use domkit_native_dom::Document;
//!
//! let mut doc = Document::with_mount("root");
//! let mount = doc.mount();
//!
//! let link = ElementDescription::new("a")
//!     .attr("href", "https://example.com")
//!     .text("go");
//! let id = render(link, mount, &mut doc).unwrap();
//!
//! assert_eq!(doc.children(mount), &[id]);
//! assert_eq!(doc.attribute(id, "href"), Some("https://example.com"));
//! assert_eq!(doc.text_content(id), "go");
//! ```

mod document;
mod names;

pub use document::{Document, ElementData, Node, NodeData};
pub use names::is_void_element;
pub use domkit_core::NodeId;
