use askama_escape::{escape, Html};
use domkit_native_dom::{is_void_element, Document, Node, NodeData, NodeId};
use std::fmt::Write;

/// Writes documents out as HTML.
#[derive(Clone, Copy, Debug, Default)]
pub struct Renderer {
    /// Put every element on its own line, indented by depth.
    ///
    /// Elements whose only content is a single text node stay on one line.
    pub pretty: bool,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Render `node` and its descendants. The root renders as its children.
    pub fn render(&self, doc: &Document, node: NodeId) -> String {
        let mut buf = String::new();
        self.render_to(&mut buf, doc, node)
            .expect("formatting into a String cannot fail");
        buf
    }

    /// Render only the children of `node`.
    pub fn render_inner(&self, doc: &Document, node: NodeId) -> String {
        let mut buf = String::new();
        for child in doc.children(node) {
            self.render_to(&mut buf, doc, *child)
                .expect("formatting into a String cannot fail");
        }
        buf
    }

    pub fn render_to<W: Write + ?Sized>(
        &self,
        buf: &mut W,
        doc: &Document,
        node: NodeId,
    ) -> std::fmt::Result {
        self.write_node(buf, doc, node, 0)
    }

    fn write_node<W: Write + ?Sized>(
        &self,
        buf: &mut W,
        doc: &Document,
        id: NodeId,
        depth: usize,
    ) -> std::fmt::Result {
        let Some(node) = doc.get(id) else {
            return Ok(());
        };

        match node.data() {
            NodeData::Root => {
                for child in node.children() {
                    self.write_node(buf, doc, *child, depth)?;
                }
                Ok(())
            }

            NodeData::Text(text) => {
                self.write_indent(buf, depth)?;
                write!(buf, "{}", escape(text, Html))?;
                self.write_newline(buf)
            }

            NodeData::Element(data) => {
                self.write_indent(buf, depth)?;
                write!(buf, "<{}", data.tag)?;
                for (name, value) in data.attributes.iter() {
                    write!(buf, " {}=\"{}\"", name, escape(value, Html))?;
                }

                // the document never gives void elements children
                if is_void_element(&data.tag) {
                    write!(buf, "/>")?;
                    return self.write_newline(buf);
                }

                write!(buf, ">")?;

                if self.pretty && !is_inline(doc, node) {
                    self.write_newline(buf)?;
                    for child in node.children() {
                        self.write_node(buf, doc, *child, depth + 1)?;
                    }
                    self.write_indent(buf, depth)?;
                } else {
                    let flat = Renderer { pretty: false };
                    for child in node.children() {
                        flat.write_node(buf, doc, *child, 0)?;
                    }
                }

                write!(buf, "</{}>", data.tag)?;
                self.write_newline(buf)
            }
        }
    }

    fn write_indent<W: Write + ?Sized>(&self, buf: &mut W, depth: usize) -> std::fmt::Result {
        if self.pretty {
            for _ in 0..depth {
                buf.write_str("  ")?;
            }
        }
        Ok(())
    }

    fn write_newline<W: Write + ?Sized>(&self, buf: &mut W) -> std::fmt::Result {
        if self.pretty {
            buf.write_char('\n')?;
        }
        Ok(())
    }
}

/// An element with no children or a single text child fits on one line.
fn is_inline(doc: &Document, node: &Node) -> bool {
    match node.children() {
        [] => true,
        [only] => doc.get(*only).is_some_and(|child| child.text().is_some()),
        _ => false,
    }
}
