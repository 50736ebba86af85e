//! 上傳標題組合
//!
//! 保留原標題文字，加上標記 hashtag、隨機抽取的固定 hashtag 與過濾後的原始 hashtag

use crate::config::UploadPrepSettings;
use anyhow::{Result, bail};
use rand::Rng;
use rand::seq::SliceRandom;

/// 標題組合器
pub struct TitleBuilder<'a> {
    settings: &'a UploadPrepSettings,
}

impl<'a> TitleBuilder<'a> {
    /// 固定 hashtag 數量不足以抽取時回傳錯誤
    pub fn new(settings: &'a UploadPrepSettings) -> Result<Self> {
        if settings.hashtag_pick_count > settings.fixed_hashtags.len() {
            bail!(
                "固定 hashtag 只有 {} 個，無法抽取 {} 個",
                settings.fixed_hashtags.len(),
                settings.hashtag_pick_count
            );
        }
        Ok(Self { settings })
    }

    /// 原始 hashtag 是否保留
    ///
    /// 以 `#f` 開頭、含 `@` 或在排除清單中的都會被移除
    #[must_use]
    pub fn keeps_hashtag(&self, tag: &str) -> bool {
        !(tag.starts_with("#f")
            || tag.contains('@')
            || self.settings.excluded_hashtags.iter().any(|t| t == tag))
    }

    /// 由不含副檔名的原標題組出新標題
    pub fn build_title<R: Rng + ?Sized>(&self, base_title: &str, rng: &mut R) -> String {
        let (words, hashtags): (Vec<&str>, Vec<&str>) = base_title
            .split_whitespace()
            .partition(|part| !part.starts_with('#'));

        let original: Vec<&str> = hashtags
            .into_iter()
            .filter(|tag| self.keeps_hashtag(tag))
            .collect();

        let picked: Vec<&str> = self
            .settings
            .fixed_hashtags
            .choose_multiple(rng, self.settings.hashtag_pick_count)
            .map(String::as_str)
            .collect();

        let segments = [
            words.join(" "),
            self.settings.marker_hashtag.clone(),
            picked.join(" "),
            original.join(" "),
        ];

        segments
            .iter()
            .filter(|segment| !segment.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 標題是否在長度上限內（以字元計）
    #[must_use]
    pub fn within_limit(&self, title: &str) -> bool {
        title.chars().count() <= self.settings.title_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn settings_with(fixed: &[&str], pick: usize) -> UploadPrepSettings {
        UploadPrepSettings {
            fixed_hashtags: fixed.iter().map(ToString::to_string).collect(),
            hashtag_pick_count: pick,
            ..UploadPrepSettings::default()
        }
    }

    #[test]
    fn test_keeps_hashtag_rules() {
        let settings = UploadPrepSettings::default();
        let builder = TitleBuilder::new(&settings).unwrap();

        assert!(builder.keeps_hashtag("#cooking"));
        assert!(!builder.keeps_hashtag("#fyp"));
        assert!(!builder.keeps_hashtag("#foryou"));
        assert!(!builder.keeps_hashtag("#tiktok"));
        assert!(!builder.keeps_hashtag("#me@home"));
        assert!(builder.keeps_hashtag("#Fun"));
    }

    #[test]
    fn test_build_title_order() {
        let settings = settings_with(&["#brand"], 1);
        let builder = TitleBuilder::new(&settings).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let title = builder.build_title("best pasta #fyp #recipe #duet@x ever", &mut rng);
        assert_eq!(title, "best pasta ever #shorts #brand #recipe");
    }

    #[test]
    fn test_build_title_without_words_or_tags() {
        let settings = settings_with(&["#brand"], 1);
        let builder = TitleBuilder::new(&settings).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(builder.build_title("#fyp", &mut rng), "#shorts #brand");
    }

    #[test]
    fn test_build_title_picks_distinct_fixed_tags() {
        let settings = settings_with(&["#a", "#b", "#c", "#d"], 3);
        let builder = TitleBuilder::new(&settings).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let title = builder.build_title("clip", &mut rng);
        let picked: Vec<&str> = title.split(' ').skip(2).collect();

        assert!(title.starts_with("clip #shorts "));
        assert_eq!(picked.len(), 3);
        for tag in &picked {
            assert!(["#a", "#b", "#c", "#d"].contains(tag));
        }
        assert!(picked[0] != picked[1] && picked[1] != picked[2] && picked[0] != picked[2]);
    }

    #[test]
    fn test_too_few_fixed_tags_is_error() {
        let settings = settings_with(&["#a"], 3);
        assert!(TitleBuilder::new(&settings).is_err());
    }

    #[test]
    fn test_within_limit_counts_chars() {
        let settings = UploadPrepSettings {
            title_limit: 3,
            ..UploadPrepSettings::default()
        };
        let builder = TitleBuilder::new(&settings).unwrap();

        assert!(builder.within_limit("影片名"));
        assert!(!builder.within_limit("影片名稱"));
    }
}
