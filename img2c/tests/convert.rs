//! End-to-end conversions through encoded image bytes.

use image::{Rgba, RgbaImage};
use img2c::{
    AsciiPipeline, CellSize, RenderStyle,
    color::ColorTable,
    encode::encode_png,
    error::ErrorKind,
    maps::CharMap,
    source::ImageSource,
};

fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let v = ((x * 7 + y * 13) % 256) as u8;
        Rgba([v, v / 2, 255 - v, 255])
    })
}

fn png(img: &RgbaImage) -> Vec<u8> {
    encode_png(img).unwrap()
}

fn style() -> RenderStyle {
    let colors = ColorTable::default();
    RenderStyle {
        background: colors.resolve("black"),
        ink: colors.resolve("gray"),
    }
}

#[test]
fn output_follows_the_dimension_law() {
    let bytes = png(&gradient(53, 37));
    for (w, h) in [(1, 1), (4, 3), (10, 10), (7, 36), (53, 37), (60, 2)] {
        let pipeline = AsciiPipeline::new(CharMap::Default, CellSize::new(w, h), None);
        let out = pipeline.convert(bytes.as_slice()).unwrap();
        let lines: Vec<&str> = out.ascii.split_terminator('\n').collect();
        assert_eq!(lines.len() as u32, 37 / h, "cell {w}x{h}");
        assert!(lines.iter().all(|l| l.chars().count() as u32 == 53 / w));
    }
}

#[test]
fn conversion_is_repeatable() {
    let bytes = png(&gradient(64, 48));
    let pipeline = AsciiPipeline::new(CharMap::Detailed, CellSize::new(3, 5), Some(style()));
    let first = pipeline.convert(bytes.as_slice()).unwrap();
    let second = pipeline.convert(bytes.as_slice()).unwrap();
    assert_eq!(first.ascii, second.ascii);
    assert_eq!(first.image, second.image);
}

#[test]
fn single_char_palette_fills_the_grid() {
    let bytes = png(&gradient(40, 20));
    let out = img2c::convert(bytes.as_slice(), CharMap::custom("X"), CellSize::new(4, 4), None)
        .unwrap();
    assert_eq!(out.ascii, "XXXXXXXXXX\n".repeat(5));
}

#[test]
fn rendered_image_keeps_the_source_size() {
    let bytes = png(&RgbaImage::from_pixel(15, 15, Rgba([255, 255, 255, 255])));
    let out = img2c::convert(
        bytes.as_slice(),
        CharMap::custom("M "),
        CellSize::new(10, 10),
        Some(style()),
    )
    .unwrap();
    assert_eq!(out.ascii, "M\n");
    let img = out.image.unwrap();
    assert_eq!(img.dimensions(), (15, 15));
    let bg = style().background;
    // the 8x8 glyph stays inside the single cell
    for (x, y, px) in img.enumerate_pixels() {
        if x >= 8 || y >= 8 {
            assert_eq!(*px, bg, "({x}, {y})");
        }
    }
    assert!(img.pixels().any(|px| *px == style().ink));
}

#[test]
fn jpeg_input_is_accepted() {
    let mut jpeg = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(gradient(16, 16))
        .to_rgb8()
        .write_to(&mut jpeg, image::ImageFormat::Jpeg)
        .unwrap();
    let out = img2c::convert(jpeg.get_ref().as_slice(), CharMap::Classic, CellSize::new(8, 8), None)
        .unwrap();
    assert_eq!(out.ascii.lines().count(), 2);
}

#[test]
fn file_sources_convert() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.png");
    std::fs::write(&path, png(&gradient(20, 10))).unwrap();
    let reader = ImageSource::Path(path).open().unwrap();
    let out = img2c::convert(reader, CharMap::Default, CellSize::new(10, 10), None).unwrap();
    assert_eq!(out.ascii.len(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn url_sources_convert() {
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cat.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png(&gradient(30, 30))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/missing.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let base = server.uri();
    let (ok, missing) = tokio::task::spawn_blocking(move || {
        let ok = ImageSource::Url(format!("{base}/cat.png"))
            .open()
            .and_then(|r| img2c::convert(r, CharMap::Default, CellSize::new(10, 10), None));
        let missing = ImageSource::Url(format!("{base}/missing.png")).open().err();
        (ok, missing)
    })
    .await
    .unwrap();

    assert_eq!(ok.unwrap().ascii.lines().count(), 3);
    assert_eq!(missing.map(|e| e.kind()), Some(ErrorKind::SourceUnavailable));
}
