//! 4桁ファイルIDの分解
//!
//! `file_ID = zone*1000 + category*100 + category_image`。
//! 規約上、末尾の1桁は予約（常に0）。

/// ファイル名先頭の4桁ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(pub u32);

impl FileId {
    pub fn zone_id(&self) -> u32 {
        self.0 / 1000
    }

    pub fn category_id(&self) -> u32 {
        (self.0 % 1000) / 100
    }

    pub fn category_image_id(&self) -> u32 {
        self.0 % 100
    }

    /// ゾーン・カテゴリ・画像番号（10の位）から組み立て直した値と一致するか
    ///
    /// 末尾桁が0でないIDは不一致になる。記録のみでマニフェストからは除外しない。
    pub fn is_consistent(&self) -> bool {
        let tens = self.category_image_id() / 10;
        self.0 == self.zone_id() * 1000 + self.category_id() * 100 + tens * 10
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decomposition_recomposes_for_all_ids() {
        for id in 0..=9999u32 {
            let f = FileId(id);
            assert_eq!(
                f.zone_id() * 1000 + f.category_id() * 100 + f.category_image_id(),
                id
            );
        }
    }

    #[test]
    fn test_decomposition_example() {
        let f = FileId(2130);
        assert_eq!(f.zone_id(), 2);
        assert_eq!(f.category_id(), 1);
        assert_eq!(f.category_image_id(), 30);
        assert!(f.is_consistent());
    }

    #[test]
    fn test_trailing_digit_breaks_consistency() {
        assert!(!FileId(1).is_consistent());
        assert!(!FileId(3601).is_consistent());
        assert!(FileId(0).is_consistent());
        assert!(FileId(3610).is_consistent());
    }

    #[test]
    fn test_display_keeps_padding() {
        assert_eq!(FileId(1).to_string(), "0001");
        assert_eq!(FileId(2101).to_string(), "2101");
    }
}
