use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// ファイル内容の SHA-256（16進小文字）
///
/// `chunk_size` バイトずつ読み込むため、ファイルサイズに関わらずメモリ使用量は一定。
pub fn sha256_file(path: &Path, chunk_size: usize) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; chunk_size.max(1)];

    loop {
        let n = match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    // SHA-256("") / SHA-256("abc")
    const EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    #[test]
    fn test_known_digests() {
        let dir = tempdir().unwrap();
        let empty = dir.path().join("empty.jpg");
        let abc = dir.path().join("abc.jpg");
        std::fs::write(&empty, b"").unwrap();
        std::fs::write(&abc, b"abc").unwrap();

        assert_eq!(sha256_file(&empty, 1024).unwrap(), EMPTY);
        assert_eq!(sha256_file(&abc, 1024).unwrap(), ABC);
    }

    #[test]
    fn test_chunk_size_does_not_change_digest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");
        let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        std::fs::write(&path, &data).unwrap();

        let whole = sha256_file(&path, 1 << 20).unwrap();
        assert_eq!(sha256_file(&path, 1).unwrap(), whole);
        assert_eq!(sha256_file(&path, 7).unwrap(), whole);
        assert_eq!(sha256_file(&path, 4096).unwrap(), whole);
        assert_eq!(whole, hex::encode(Sha256::digest(&data)));
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(sha256_file(Path::new("/nonexistent/file.jpg"), 1024).is_err());
    }
}
