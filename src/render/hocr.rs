//! hOCR rendering for page trees.

use crate::model::{Block, Document, ElementKind, Line, Paragraph, Rect, Word};
use html_escape::{encode_quoted_attribute, encode_text};

use super::HocrOptions;

/// Baseline emitted on every line. Baselines are not estimated.
pub const BASELINE_PLACEHOLDER: &str = "0 0";

/// Element classes advertised in the `ocr-capabilities` meta tag.
pub const CAPABILITIES: &str = "ocr_page ocr_carea ocr_par ocr_line ocrx_word";

const DOCTYPE: &str = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">"#;

/// Convert a document to hOCR markup.
pub fn to_hocr(doc: &Document, options: &HocrOptions) -> String {
    HocrRenderer::new(options.clone()).render(doc)
}

/// An element below the page, borrowed from the tree.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Block(&'a Block),
    Paragraph(&'a Paragraph),
    Line(&'a Line),
    Word(&'a Word),
}

impl<'a> Node<'a> {
    /// Kind of the element.
    pub fn kind(&self) -> ElementKind {
        match *self {
            Node::Block(_) => ElementKind::Block,
            Node::Paragraph(_) => ElementKind::Paragraph,
            Node::Line(_) => ElementKind::Line,
            Node::Word(_) => ElementKind::Word,
        }
    }

    /// Element id.
    pub fn id(&self) -> &'a str {
        match *self {
            Node::Block(b) => &b.id,
            Node::Paragraph(p) => &p.id,
            Node::Line(l) => &l.id,
            Node::Word(w) => &w.id,
        }
    }

    /// Bounding rectangle, if the element has one.
    pub fn bbox(&self) -> Option<Rect> {
        match *self {
            Node::Block(b) => b.bbox,
            Node::Paragraph(p) => p.bbox,
            Node::Line(l) => l.bbox,
            Node::Word(w) => Some(w.bbox),
        }
    }

    /// Direct children in reading order.
    pub fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Node::Block(b) => b.paragraphs.iter().map(Node::Paragraph).collect(),
            Node::Paragraph(p) => p.lines.iter().map(Node::Line).collect(),
            Node::Line(l) => l.words.iter().map(Node::Word).collect(),
            Node::Word(_) => Vec::new(),
        }
    }
}

/// hOCR renderer.
///
/// Rendering is a pure function of the document: no I/O, and the same tree
/// always renders to the same markup.
#[derive(Debug, Clone, Default)]
pub struct HocrRenderer {
    options: HocrOptions,
}

impl HocrRenderer {
    /// Create a new hOCR renderer.
    pub fn new(options: HocrOptions) -> Self {
        Self { options }
    }

    /// Render a document to a complete hOCR file.
    pub fn render(&self, doc: &Document) -> String {
        let lang = encode_quoted_attribute(&doc.metadata.language);
        let title = self
            .options
            .title
            .as_deref()
            .unwrap_or(doc.metadata.title.as_str());
        let system = encode_quoted_attribute(&self.options.ocr_system);

        let mut content = String::new();
        for block in &doc.page.blocks {
            self.render_node(&mut content, Node::Block(block), &lang);
        }

        let mut out = String::with_capacity(content.len() + 1024);
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        out.push_str(DOCTYPE);
        out.push('\n');
        out.push_str(&format!(
            "<html xmlns=\"http://www.w3.org/1999/xhtml\" xml:lang=\"{lang}\" lang=\"{lang}\">\n"
        ));
        out.push_str("  <head>\n");
        out.push_str(&format!("\t<title>{}</title>\n", encode_text(title)));
        out.push_str("\t<meta http-equiv=\"Content-Type\" content=\"text/html;charset=utf-8\" />\n");
        out.push_str(&format!("\t<meta name='ocr-system' content='{system}' />\n"));
        out.push_str(&format!("\t<meta name='ocr-langs' content='{lang}' />\n"));
        out.push_str("\t<meta name='ocr-number-of-pages' content='1' />\n");
        out.push_str(&format!(
            "\t<meta name='ocr-capabilities' content='{}'/>\n",
            CAPABILITIES
        ));
        out.push_str("  </head>\n");
        out.push_str("  <body>\n");
        out.push_str(&format!(
            "\t<div class='{}' id='{}' lang='{lang}' title='bbox {}'>{content}\n\t</div>\n",
            ElementKind::Page.hocr_class(),
            doc.page.id,
            doc.page.bbox(),
        ));
        out.push_str("  </body>\n");
        out.push_str("</html>\n");
        out
    }

    fn render_node(&self, out: &mut String, node: Node<'_>, lang: &str) {
        let mut content = String::new();
        match node {
            Node::Word(word) => content.push_str(&encode_text(&word.text)),
            _ => {
                for child in node.children() {
                    self.render_node(&mut content, child, lang);
                }
            }
        }

        let class = node.kind().hocr_class();
        let id = node.id();
        let bbox = node.bbox();
        match node {
            Node::Block(_) => out.push_str(&format!(
                "\n\t\t<div class='{class}' id='{id}' lang='{lang}'{}>{content}\n\t\t</div>",
                title_attr(bbox, None)
            )),
            Node::Paragraph(_) => out.push_str(&format!(
                "\n\t\t\t<p class='{class}' id='{id}' lang='{lang}'{}>{content}\n\t\t\t</p>",
                title_attr(bbox, None)
            )),
            Node::Line(_) => out.push_str(&format!(
                "\n\t\t\t\t<span class='{class}' id='{id}'{}>{content}\n\t\t\t\t</span>",
                title_attr(bbox, Some(BASELINE_PLACEHOLDER))
            )),
            Node::Word(_) => out.push_str(&format!(
                "\n\t\t\t\t\t<span class='{class}' id='{id}'{}>{content}</span>",
                title_attr(bbox, None)
            )),
        }
    }
}

/// The ` title='...'` attribute holding hOCR properties; empty when there is
/// nothing to say.
fn title_attr(bbox: Option<Rect>, baseline: Option<&str>) -> String {
    let mut props = Vec::with_capacity(2);
    if let Some(rect) = bbox {
        props.push(format!("bbox {}", rect));
    }
    if let Some(baseline) = baseline {
        props.push(format!("baseline {}", baseline));
    }
    if props.is_empty() {
        String::new()
    } else {
        format!(" title='{}'", props.join("; "))
    }
}
