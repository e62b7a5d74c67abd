use lopdf::Document as LopdfDocument;
use std::collections::BTreeSet;

/// Base font names referenced by any font dictionary in the document
pub fn extract_font_names(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts = BTreeSet::new();
    for object in doc.objects.values() {
        let Ok(dict) = object.as_dict() else { continue };
        let Ok(font_dict) = dict.get(b"Font").and_then(|f| f.as_dict()) else {
            continue;
        };
        for (_name, font) in font_dict.iter() {
            if let Ok(base_font) = font.as_dict().and_then(|f| f.get(b"BaseFont")) {
                if let Ok(name) = base_font.as_name() {
                    fonts.insert(String::from_utf8_lossy(name).to_string());
                }
            }
        }
    }
    fonts.into_iter().collect()
}

/// Number of image XObjects in the document
pub fn count_images(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter_map(|obj| obj.as_stream().ok())
        .filter(|stream| {
            stream
                .dict
                .get(b"Subtype")
                .and_then(|s| s.as_name())
                .map(|name| name == b"Image")
                .unwrap_or(false)
        })
        .count()
}

/// Title from the document information dictionary
pub fn info_title(doc: &LopdfDocument) -> Option<String> {
    let info_id = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    let title = doc.get_dictionary(info_id).ok()?.get(b"Title").ok()?;
    title.as_str().ok().map(|t| String::from_utf8_lossy(t).to_string())
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert minimum number of pages
#[macro_export]
macro_rules! assert_pdf_min_pages {
    ($pdf:expr, $min:expr) => {
        assert!(
            $pdf.page_count() >= $min,
            "Expected at least {} pages, got {}",
            $min,
            $pdf.page_count()
        );
    };
}

/// Assert that PDF contains a font matching a pattern
#[macro_export]
macro_rules! assert_pdf_has_font {
    ($pdf:expr, $pattern:expr) => {
        let fonts = $crate::common::pdf_assertions::extract_font_names(&$pdf.doc);
        assert!(
            fonts.iter().any(|f| f.contains($pattern)),
            "PDF should contain font matching '{}', fonts found: {:?}",
            $pattern,
            fonts
        );
    };
}

/// Assert that some text run of a generated document contains `text`
#[macro_export]
macro_rules! assert_layout_contains_text {
    ($doc:expr, $text:expr) => {
        assert!(
            $doc.layout.contains_text($text),
            "Document should contain '{}', runs were:\n{:#?}",
            $text,
            $crate::common::text_runs(&$doc)
        );
    };
}

/// Assert that no text run of a generated document contains `text`
#[macro_export]
macro_rules! assert_layout_not_contains_text {
    ($doc:expr, $text:expr) => {
        assert!(
            !$doc.layout.contains_text($text),
            "Document should NOT contain '{}'",
            $text
        );
    };
}
