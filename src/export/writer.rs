//! PDF document assembly.
//!
//! Builds the finished multi-page file from the page plan produced by the
//! pagination loop: one image XObject per content strip, a shared XObject
//! for the repeated header, and `/Link` annotations for every remapped
//! hyperlink rectangle. Millimeters are converted to PDF points at this
//! boundary only.

use crate::error::Result;
use crate::export::geometry::{Mm, PageMetrics};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

const MM_TO_PT: f32 = 72.0 / 25.4;

/// A JPEG image placed at a physical rectangle.
#[derive(Debug, Clone)]
pub(crate) struct ImagePlacement {
    pub jpeg: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
    pub rect: RectMm,
}

/// A link annotation at a physical rectangle.
#[derive(Debug, Clone)]
pub(crate) struct LinkPlacement {
    pub href: String,
    pub rect: RectMm,
}

/// Axis-aligned rectangle in page millimeters, origin top-left.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RectMm {
    pub x: Mm,
    pub y: Mm,
    pub width: Mm,
    pub height: Mm,
}

/// One physical page: an optional content strip plus its link annotations.
/// The shared header placement is passed separately and repeated on every
/// page.
#[derive(Debug, Clone)]
pub(crate) struct PagePlan {
    pub strip: Option<ImagePlacement>,
    pub links: Vec<LinkPlacement>,
}

/// Assemble the finished PDF.
pub(crate) fn write_pdf(
    metrics: &PageMetrics,
    header: Option<&ImagePlacement>,
    pages: &[PagePlan],
) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let header_xobject = header.map(|image| doc.add_object(image_xobject(image)));

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for plan in pages {
        let mut xobjects = Dictionary::new();
        let mut operations: Vec<Operation> = Vec::new();

        if let (Some(image), Some(id)) = (header, header_xobject) {
            xobjects.set("ImH", Object::Reference(id));
            operations.extend(draw_image_ops("ImH", &image.rect, metrics));
        }
        if let Some(strip) = &plan.strip {
            let strip_id = doc.add_object(image_xobject(strip));
            xobjects.set("ImC", Object::Reference(strip_id));
            operations.extend(draw_image_ops("ImC", &strip.rect, metrics));
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => media_box(metrics),
            "Contents" => Object::Reference(content_id),
            "Resources" => dictionary! {
                "XObject" => Object::Dictionary(xobjects),
            },
        };

        if !plan.links.is_empty() {
            let annots: Vec<Object> = plan
                .links
                .iter()
                .map(|link| Object::Reference(doc.add_object(link_annotation(link, metrics))))
                .collect();
            page_dict.set("Annots", Object::Array(annots));
        }

        kids.push(Object::Reference(doc.add_object(page_dict)));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => Object::Array(kids),
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

fn media_box(metrics: &PageMetrics) -> Object {
    Object::Array(vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Real(metrics.width.0 * MM_TO_PT),
        Object::Real(metrics.height.0 * MM_TO_PT),
    ])
}

fn image_xobject(image: &ImagePlacement) -> Stream {
    Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => image.width_px as i64,
            "Height" => image.height_px as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8i64,
            "Filter" => "DCTDecode",
        },
        image.jpeg.clone(),
    )
}

/// `q <w> 0 0 <h> <x> <y> cm /<name> Do Q` with the rect converted to the
/// PDF's bottom-left coordinate system.
fn draw_image_ops(name: &str, rect: &RectMm, metrics: &PageMetrics) -> Vec<Operation> {
    let x = rect.x.0 * MM_TO_PT;
    let y = (metrics.height.0 - rect.y.0 - rect.height.0) * MM_TO_PT;
    let w = rect.width.0 * MM_TO_PT;
    let h = rect.height.0 * MM_TO_PT;

    vec![
        Operation::new("q", vec![]),
        Operation::new(
            "cm",
            vec![
                Object::Real(w),
                Object::Real(0.0),
                Object::Real(0.0),
                Object::Real(h),
                Object::Real(x),
                Object::Real(y),
            ],
        ),
        Operation::new("Do", vec![Object::Name(name.as_bytes().to_vec())]),
        Operation::new("Q", vec![]),
    ]
}

fn link_annotation(link: &LinkPlacement, metrics: &PageMetrics) -> Dictionary {
    let x0 = link.rect.x.0 * MM_TO_PT;
    let x1 = (link.rect.x.0 + link.rect.width.0) * MM_TO_PT;
    let y1 = (metrics.height.0 - link.rect.y.0) * MM_TO_PT;
    let y0 = (metrics.height.0 - link.rect.y.0 - link.rect.height.0) * MM_TO_PT;

    dictionary! {
        "Type" => "Annot",
        "Subtype" => "Link",
        "Rect" => Object::Array(vec![
            Object::Real(x0),
            Object::Real(y0),
            Object::Real(x1),
            Object::Real(y1),
        ]),
        "Border" => Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(0),
        ]),
        "A" => Object::Dictionary(dictionary! {
            "Type" => "Action",
            "S" => "URI",
            "URI" => Object::string_literal(link.href.clone()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::surface::Bitmap;

    fn placement(width_px: u32, height_px: u32, rect: RectMm) -> ImagePlacement {
        ImagePlacement {
            jpeg: Bitmap::blank(width_px, height_px).to_jpeg(80).unwrap(),
            width_px,
            height_px,
            rect,
        }
    }

    #[test]
    fn test_single_page_structure() {
        let metrics = PageMetrics::a4();
        let strip = placement(
            100,
            200,
            RectMm {
                x: Mm(8.0),
                y: Mm(8.0),
                width: Mm(194.0),
                height: Mm(26.0),
            },
        );
        let pages = vec![PagePlan {
            strip: Some(strip),
            links: vec![LinkPlacement {
                href: "https://example.com".to_string(),
                rect: RectMm {
                    x: Mm(10.0),
                    y: Mm(12.0),
                    width: Mm(30.0),
                    height: Mm(4.0),
                },
            }],
        }];

        let bytes = write_pdf(&metrics, None, &pages).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));

        let parsed = Document::load_mem(&bytes).unwrap();
        assert_eq!(parsed.get_pages().len(), 1);
    }

    #[test]
    fn test_header_shared_across_pages() {
        let metrics = PageMetrics::a4();
        let header = placement(
            100,
            40,
            RectMm {
                x: Mm(8.0),
                y: Mm(8.0),
                width: Mm(194.0),
                height: Mm(10.0),
            },
        );
        let pages = vec![
            PagePlan {
                strip: None,
                links: vec![],
            },
            PagePlan {
                strip: None,
                links: vec![],
            },
        ];

        let bytes = write_pdf(&metrics, Some(&header), &pages).unwrap();
        let parsed = Document::load_mem(&bytes).unwrap();
        assert_eq!(parsed.get_pages().len(), 2);
    }

    #[test]
    fn test_empty_page_list_still_valid() {
        let metrics = PageMetrics::a4();
        let bytes = write_pdf(&metrics, None, &[]).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
    }
}
