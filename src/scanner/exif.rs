use evidence_manifest_common::ImageMeta;
use image::ImageReader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// 画像の寸法・向き・EXIF Orientation を取得
///
/// 画像として開けない場合は `(0, 0, None, UNKNOWN)` を返す。
/// EXIF の読み取り失敗は「向き情報なし」として扱う。
pub fn image_meta(path: &Path) -> ImageMeta {
    let (width, height) = match read_dimensions(path) {
        Ok(dims) => dims,
        Err(_) => return ImageMeta::unknown(),
    };

    let exif_orientation = extract_orientation(path).ok().flatten();
    ImageMeta::new(width, height, exif_orientation)
}

fn read_dimensions(path: &Path) -> Result<(u32, u32), Box<dyn std::error::Error>> {
    // 拡張子ではなく内容から形式を判定する
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    Ok(reader.into_dimensions()?)
}

fn extract_orientation(path: &Path) -> Result<Option<u32>, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let mut bufreader = BufReader::new(file);
    let exif_reader = exif::Reader::new();
    let exif = exif_reader.read_from_container(&mut bufreader)?;

    // 0 は未設定扱い
    let orientation = exif
        .get_field(exif::Tag::Orientation, exif::In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .filter(|&v| v != 0);

    Ok(orientation)
}
