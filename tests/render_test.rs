//! Integration tests for hOCR and JSON rendering.

use vision_hocr::model::{Block, Document, Line, Page, Paragraph, Rect, Word};
use vision_hocr::render::{to_hocr, to_json, HocrOptions, HocrRenderer, JsonFormat, CAPABILITIES};

fn sample_document() -> Document {
    let mut line = Line::new("line_2_1");
    line.push(Word::new("word_2_1", Rect::new(10, 10, 60, 30), "Tom"));
    line.push(Word::new("word_2_2", Rect::new(70, 10, 130, 30), "&"));
    line.push(Word::new("word_2_3", Rect::new(140, 10, 200, 30), "\"Jerry\""));

    let mut para = Paragraph::new("par_2_1");
    para.add_line(line.close());
    para.add_line(Line::new("line_2_2").close());

    let mut block = Block::new("block_2_1");
    block.add_paragraph(para.close(None));

    let mut page = Page::new(2, 400, 300);
    page.add_block(block.close(None));
    Document::new(page).with_language("en")
}

#[test]
fn test_document_skeleton() {
    let hocr = to_hocr(&sample_document(), &HocrOptions::default());

    let lines: Vec<&str> = hocr.lines().collect();
    assert_eq!(lines[0], "<?xml version=\"1.0\" encoding=\"UTF-8\"?>");
    assert!(lines[1].starts_with("<!DOCTYPE html PUBLIC \"-//W3C//DTD XHTML 1.0 Transitional//EN\""));
    assert!(hocr.contains("<html xmlns=\"http://www.w3.org/1999/xhtml\" xml:lang=\"en\" lang=\"en\">"));
    assert!(hocr.contains(&format!("<meta name='ocr-capabilities' content='{}'/>", CAPABILITIES)));
    assert_eq!(hocr.matches("<body>").count(), 1);
    assert_eq!(hocr.matches("class='ocr_page'").count(), 1);
}

#[test]
fn test_nesting_order() {
    let hocr = to_hocr(&sample_document(), &HocrOptions::default());

    let order = [
        "page_2'",
        "block_2_1",
        "par_2_1",
        "line_2_1",
        "word_2_1",
        "word_2_3",
        "line_2_2",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|id| hocr.find(id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_escaping() {
    let hocr = to_hocr(&sample_document(), &HocrOptions::default());

    assert!(hocr.contains("title='bbox 70 10 130 30'>&amp;</span>"));
    assert!(hocr.contains(">\"Jerry\"</span>"));
    assert!(!hocr.contains("&amp;amp;"));
}

#[test]
fn test_empty_line_and_aggregates() {
    let hocr = to_hocr(&sample_document(), &HocrOptions::default());

    assert!(hocr.contains("<span class='ocr_line' id='line_2_1' title='bbox 10 10 200 30; baseline 0 0'>"));
    assert!(hocr.contains("<span class='ocr_line' id='line_2_2' title='baseline 0 0'>"));
    assert!(hocr.contains("<p class='ocr_par' id='par_2_1' lang='en' title='bbox 10 10 200 30'>"));
}

#[test]
fn test_rendering_is_deterministic() {
    let doc = sample_document();
    let renderer = HocrRenderer::new(HocrOptions::new().with_title("cartoon"));
    assert_eq!(renderer.render(&doc), renderer.render(&doc));
    assert!(renderer.render(&doc).contains("<title>cartoon</title>"));
}

#[test]
fn test_json_dump() {
    let doc = sample_document();
    let json = to_json(&doc, JsonFormat::Pretty).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["metadata"]["language"], "en");
    assert_eq!(value["page"]["blocks"][0]["paragraphs"][0]["lines"][0]["words"][1]["text"], "&");
    assert!(value["page"]["blocks"][0]["paragraphs"][0]["lines"][1]["bbox"].is_null());
}
