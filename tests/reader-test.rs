use zho_categorizer::reader::{collapse_lines, encoding_for_label, read_input};
use zho_categorizer::CategorizeError;

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{GBK, UTF_8};
    use std::fs;

    #[test]
    fn collapse_lines_test() {
        assert_eq!(collapse_lines("学霸\n宅男\n"), "学霸 宅男 ");
        assert_eq!(collapse_lines("学霸\r\n宅男"), "学霸 宅男 ");
        assert_eq!(collapse_lines("a\n\nb"), "a  b ");
        assert_eq!(collapse_lines(""), "");
    }

    #[test]
    fn encoding_for_label_test() {
        assert_eq!(encoding_for_label("UTF-8").unwrap(), UTF_8);
        assert_eq!(encoding_for_label("gbk").unwrap(), GBK);
        let err = encoding_for_label("klingon").unwrap_err();
        assert!(matches!(err, CategorizeError::UnsupportedEncoding(ref l) if l == "klingon"));
    }

    #[test]
    fn read_input_gbk_test() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gbk.txt");
        let (bytes, _, _) = GBK.encode("守株待兔\n纸上谈兵\n");
        fs::write(&path, &bytes).unwrap();

        assert_eq!(read_input(&path, GBK).unwrap(), "守株待兔 纸上谈兵 ");
    }

    #[test]
    fn read_input_bom_test() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bom.txt");
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("吃土".as_bytes());
        fs::write(&path, &bytes).unwrap();

        assert_eq!(read_input(&path, GBK).unwrap(), "吃土 ");
    }

    #[test]
    fn read_input_utf16_bom_test() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("utf16.txt");
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "宅男\n学霸".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        fs::write(&path, &bytes).unwrap();

        assert_eq!(read_input(&path, UTF_8).unwrap(), "宅男 学霸 ");
    }

    #[test]
    fn read_input_missing_file_test() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(dir.path().join("missing.txt"), UTF_8).unwrap_err();
        assert!(matches!(err, CategorizeError::InputOpenFailure { .. }));
        assert!(err.to_string().starts_with("failed to open input file"));
    }
}
