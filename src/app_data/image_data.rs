use bollard::models::ImageSummary;

/// Tag docker gives to dangling images
const NONE_TAG: &str = "<none>:<none>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageItem {
    pub tags: Vec<String>,
    pub size: u64,
}

impl ImageItem {
    #[cfg(test)]
    pub fn new(tags: &[&str], size: u64) -> Self {
        Self {
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            size,
        }
    }

    /// Untagged images are left out of every listing
    pub fn is_tagged(&self) -> bool {
        self.tags.iter().any(|t| t != NONE_TAG)
    }

    /// Split the first tag into repository and tag, a registry port is part of the repository
    fn split_tag(&self) -> (&str, &str) {
        let first = self
            .tags
            .iter()
            .find(|t| *t != NONE_TAG)
            .map_or("", String::as_str);
        match first.rsplit_once(':') {
            Some((repo, tag)) if !tag.contains('/') => (repo, tag),
            _ => (first, "latest"),
        }
    }

    pub fn repository(&self) -> &str {
        self.split_tag().0
    }

    pub fn tag(&self) -> &str {
        self.split_tag().1
    }

    /// Size in megabytes, to two decimal places
    pub fn size_display(&self) -> String {
        #[allow(clippy::cast_precision_loss)]
        let mb = self.size as f64 / (1024.0 * 1024.0);
        format!("{mb:.2} MB")
    }
}

impl From<ImageSummary> for ImageItem {
    fn from(summary: ImageSummary) -> Self {
        Self {
            tags: summary.repo_tags,
            size: u64::try_from(summary.size).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_repository_and_tag() {
        let image = ImageItem::new(&["postgres:16-alpine", "postgres:latest"], 0);
        assert_eq!(image.repository(), "postgres");
        assert_eq!(image.tag(), "16-alpine");
    }

    #[test]
    fn registry_port_stays_in_repository() {
        let image = ImageItem::new(&["localhost:5000/team/api"], 0);
        assert_eq!(image.repository(), "localhost:5000/team/api");
        assert_eq!(image.tag(), "latest");

        let tagged = ImageItem::new(&["localhost:5000/team/api:v2"], 0);
        assert_eq!(tagged.repository(), "localhost:5000/team/api");
        assert_eq!(tagged.tag(), "v2");
    }

    #[test]
    fn dangling_images_are_untagged() {
        assert!(!ImageItem::new(&[], 10).is_tagged());
        assert!(!ImageItem::new(&[NONE_TAG], 10).is_tagged());
        assert!(ImageItem::new(&["redis:7"], 10).is_tagged());
    }

    #[test]
    fn size_in_megabytes() {
        assert_eq!(ImageItem::new(&["a:b"], 1024 * 1024).size_display(), "1.00 MB");
        assert_eq!(ImageItem::new(&["a:b"], 146_800_640).size_display(), "140.00 MB");
        assert_eq!(ImageItem::new(&["a:b"], 0).size_display(), "0.00 MB");
    }

    #[test]
    fn negative_engine_size_is_zero() {
        let summary = ImageSummary {
            repo_tags: vec![String::from("busybox:1")],
            size: -1,
            ..Default::default()
        };
        assert_eq!(ImageItem::from(summary).size, 0);
    }
}
