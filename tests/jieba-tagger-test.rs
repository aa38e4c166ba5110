use zho_categorizer::{is_chinese_text, Category, Categorizer, JiebaTagger, PosTag, Tagger};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn from_jieba_flag_test() {
        assert_eq!(PosTag::from_jieba("山坡", "n"), PosTag::Noun);
        assert_eq!(PosTag::from_jieba("北京", "ns"), PosTag::Noun);
        assert_eq!(PosTag::from_jieba("跑", "v"), PosTag::Verb);
        assert_eq!(PosTag::from_jieba("发展", "vn"), PosTag::Verb);
        assert_eq!(PosTag::from_jieba("可以", "v"), PosTag::Modal);
        assert_eq!(PosTag::from_jieba("能够", "v"), PosTag::Modal);
        assert_eq!(PosTag::from_jieba("美丽", "a"), PosTag::Adjective);
        assert_eq!(PosTag::from_jieba("认真", "ad"), PosTag::Adverb);
        assert_eq!(PosTag::from_jieba("很", "d"), PosTag::Adverb);
        assert_eq!(PosTag::from_jieba("这", "r"), PosTag::Determiner);
        assert_eq!(PosTag::from_jieba("我", "r"), PosTag::Other);
        assert_eq!(PosTag::from_jieba("的", "uj"), PosTag::Other);
        assert_eq!(PosTag::from_jieba("，", "x"), PosTag::Other);
        assert_eq!(PosTag::from_jieba("rust", "eng"), PosTag::Other);
        assert_eq!(PosTag::from_jieba("", ""), PosTag::Other);
    }

    #[test]
    fn jieba_tag_covers_input_test() {
        let input = "碧绿的山坡前几千只绵羊， 挨成一片的雪绒 ";
        let tagger = JiebaTagger::new();
        let tokens = tagger.tag(input).unwrap();

        assert!(!tokens.is_empty());
        assert!(tokens.iter().all(|t| !t.text.trim().is_empty()));
        let joined: String = tokens
            .iter()
            .flat_map(|t| t.text.chars())
            .filter(|c| !c.is_whitespace())
            .collect();
        let expected: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(joined, expected);
    }

    #[test]
    fn jieba_tag_is_repeatable_test() {
        let input = "他是一个学霸，也是宅男。";
        let tagger = JiebaTagger::new().hmm(false);
        assert_eq!(tagger.tag(input).unwrap(), tagger.tag(input).unwrap());
    }

    #[test]
    fn jieba_categorize_text_test() {
        let input = "山坡 hello 山坡";
        let categorizer = Categorizer::new();
        let result = categorizer.categorize_text(input).unwrap();
        let chinese_tokens = categorizer
            .tagger()
            .tag(input)
            .unwrap()
            .iter()
            .filter(|t| is_chinese_text(&t.text))
            .count();

        assert_eq!(result.get(Category::Characters), ["山", "坡", "山", "坡"]);
        assert!(result
            .iter()
            .all(|(_, items)| items.iter().all(|item| !item.contains("hello"))));

        let primary: usize = Category::ALL
            .iter()
            .filter(|c| c.is_primary())
            .map(|&c| result.get(c).len())
            .sum();
        assert_eq!(primary, chinese_tokens);
    }

    #[test]
    fn jieba_shared_instance_test() {
        let owned = JiebaTagger::new();
        let shared = JiebaTagger::with_jieba(Arc::clone(&owned.jieba));
        assert!(Arc::ptr_eq(&owned.jieba, &shared.jieba));

        let input = "他是一个学霸，也是宅男。";
        assert_eq!(shared.tag(input).unwrap(), owned.tag(input).unwrap());
    }

    #[test]
    fn jieba_empty_input_test() {
        let categorizer = Categorizer::new();
        let ranked = categorizer.rank_text("").unwrap();
        assert_eq!(ranked.total_len(), 0);
    }
}
