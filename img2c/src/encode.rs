use crate::error::*;
use base64::{Engine, engine::general_purpose::STANDARD};
use image::{ImageFormat, RgbaImage};
use std::{io::Cursor, path::Path};

pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, Error> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| Error::Encode(format!("{ERROR_ENCODING_IMAGE}: {e}")))?;
    Ok(buf.into_inner())
}

/// PNG-encodes `img` into a `data:` URI suitable for an `<img src>`.
pub fn to_data_uri(img: &RgbaImage) -> Result<String, Error> {
    let png = encode_png(img)?;
    Ok(format!("{PNG_DATA_URI_PREFIX}{}", STANDARD.encode(png)))
}

pub fn save_png(img: &RgbaImage, path: &Path) -> Result<(), Error> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| Error::Encode(format!("{ERROR_ENCODING_IMAGE} {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn data_uri_holds_a_decodable_png() {
        let img = RgbaImage::from_pixel(3, 2, Rgba([0, 0, 255, 255]));
        let uri = to_data_uri(&img).unwrap();
        let payload = uri.strip_prefix(PNG_DATA_URI_PREFIX).unwrap();
        let png = STANDARD.decode(payload).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded, img);
    }

    #[test]
    fn saved_file_is_a_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        save_png(&RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255])), &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
    }
}
