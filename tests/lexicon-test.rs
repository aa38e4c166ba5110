use zho_categorizer::lexicon_lib::is_compressed_path;
use zho_categorizer::{CategorizeError, Lexicon, PhraseSet};

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn phrase_set_matches_whole_text_test() {
        let set: PhraseSet = ["学霸", "LOL"].into_iter().collect();
        assert!(set.matches("学霸"));
        assert!(set.matches("lol"));
        assert!(set.matches("Lol"));
        assert!(!set.matches("学"));
        assert!(!set.matches("学霸们"));
        assert!(!set.matches(""));
    }

    #[test]
    fn phrase_set_ignores_case_duplicates_test() {
        let mut set = PhraseSet::new();
        assert!(set.insert("Abc"));
        assert!(!set.insert("aBC"));
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["Abc"]);
    }

    #[test]
    fn default_lexicon_test() {
        let lexicon = Lexicon::new();
        assert_eq!(lexicon.idioms.len(), 4);
        assert_eq!(lexicon.slang.len(), 4);
        assert!(lexicon.idioms.matches("守株待兔"));
        assert!(lexicon.slang.matches("高富帅"));
        assert!(lexicon.common_phrases.matches("谢谢"));
        assert!(Lexicon::default().idioms.is_empty());
    }

    #[test]
    fn lexicon_json_round_trip_test() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("lexicon.json");
        let packed = dir.path().join("lexicon.json.zst");

        let lexicon = Lexicon::new();
        lexicon.serialize_to_json(&plain).unwrap();
        lexicon.save_compressed(&packed).unwrap();

        assert_eq!(Lexicon::from_path(&plain).unwrap(), lexicon);
        assert_eq!(Lexicon::from_path(&packed).unwrap(), lexicon);
    }

    #[test]
    fn lexicon_save_follows_extension_test() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("lex.json");
        let packed = dir.path().join("lex.json.zst");
        assert!(!is_compressed_path(&plain));
        assert!(is_compressed_path(&packed));

        let lexicon = Lexicon::new();
        lexicon.save(&plain).unwrap();
        lexicon.save(&packed).unwrap();

        assert!(fs::read_to_string(&plain).unwrap().contains("守株待兔"));
        // zstd frame magic
        assert_eq!(&fs::read(&packed).unwrap()[..4], b"\x28\xB5\x2F\xFD");
        assert_eq!(Lexicon::from_path(&plain).unwrap(), lexicon);
        assert_eq!(Lexicon::from_path(&packed).unwrap(), lexicon);
    }

    #[test]
    fn lexicon_json_missing_keys_test() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        fs::write(&path, r#"{ "slang": ["躺平", "内卷"] }"#).unwrap();

        let lexicon = Lexicon::from_path(&path).unwrap();
        assert!(lexicon.idioms.is_empty());
        assert!(lexicon.common_phrases.is_empty());
        assert_eq!(lexicon.slang.iter().collect::<Vec<_>>(), vec!["躺平", "内卷"]);
    }

    #[test]
    fn lexicon_rejects_bad_files_test() {
        let dir = tempfile::tempdir().unwrap();
        let unknown_key = dir.path().join("unknown.json");
        fs::write(&unknown_key, r#"{ "proverbs": [] }"#).unwrap();
        let not_json = dir.path().join("broken.json");
        fs::write(&not_json, "idioms = []").unwrap();

        for path in [unknown_key, not_json, dir.path().join("missing.json")] {
            let err = Lexicon::from_path(&path).unwrap_err();
            assert!(matches!(err, CategorizeError::LexiconLoadFailure { .. }), "{}", err);
        }
    }

    #[test]
    fn lexicon_from_word_lists_test() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("idioms.txt"),
            "# idioms\n井底之蛙\n\n  画蛇添足  \n井底之蛙\n",
        )
        .unwrap();
        fs::write(dir.path().join("slang.txt"), "吃土\r\n学霸\r\n").unwrap();

        let lexicon = Lexicon::from_word_lists(dir.path()).unwrap();
        assert_eq!(
            lexicon.idioms.iter().collect::<Vec<_>>(),
            vec!["井底之蛙", "画蛇添足"]
        );
        assert_eq!(lexicon.slang.iter().collect::<Vec<_>>(), vec!["吃土", "学霸"]);
        assert!(lexicon.common_phrases.is_empty());
    }
}
