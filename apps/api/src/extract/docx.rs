//! DOCX text decoding.
//!
//! A DOCX file is a ZIP archive whose main content lives in
//! `word/document.xml`. Text runs (`w:t`) are collected per paragraph
//! (`w:p`) and paragraphs are joined with newlines, mirroring how word
//! processors linearize the document.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::ExtractError;

pub fn extract_text_from_docx(file_bytes: &[u8]) -> Result<String, ExtractError> {
    let cursor = Cursor::new(file_bytes);
    let mut archive =
        ZipArchive::new(cursor).map_err(|e| ExtractError::Docx(format!("not a zip archive: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Docx(format!("missing word/document.xml: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(format!("unreadable document.xml: {e}")))?;

    parse_document_xml(&xml)
}

fn parse_document_xml(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => lines.push(std::mem::take(&mut current)),
                _ => {}
            },
            // Self-closing <w:p/> is an empty paragraph.
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:p" => lines.push(String::new()),
            Ok(Event::Text(t)) if in_text_run => {
                let text = t
                    .unescape()
                    .map_err(|e| ExtractError::Docx(format!("bad xml text: {e}")))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractError::Docx(format!("xml parse error: {e}"))),
            Ok(_) => {}
        }
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    use super::*;

    /// Builds a minimal DOCX archive in memory.
    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .expect("start zip entry");
        writer
            .write_all(document_xml.as_bytes())
            .expect("write zip entry");
        writer.finish().expect("finish zip").into_inner()
    }

    const TWO_PARAGRAPHS: &str = r#"<?xml version="1.0"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
    <w:p/>
    <w:p><w:r><w:t>Skills</w:t></w:r><w:r><w:t xml:space="preserve">: Rust</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    #[test]
    fn test_docx_paragraphs_become_lines() {
        let bytes = docx_bytes(TWO_PARAGRAPHS);
        let text = extract_text_from_docx(&bytes).expect("docx decodes");
        assert_eq!(text, "Jane Doe\n\nSkills: Rust");
    }

    #[test]
    fn test_docx_without_document_xml_fails() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/other.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<x/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = extract_text_from_docx(&bytes).unwrap_err();
        assert!(err.to_string().contains("document.xml"));
    }

    #[test]
    fn test_docx_garbage_bytes_fail() {
        let err = extract_text_from_docx(b"definitely not a zip").unwrap_err();
        assert!(matches!(err, ExtractError::Docx(_)));
    }
}
