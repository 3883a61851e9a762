//! # Cover Selection Module
//!
//! Sceglie la foto di copertina del post:
//! 1. la prima foto il cui nome contiene il marker (case-insensitive)
//! 2. altrimenti la prima foto convertita con successo
//! 3. altrimenti nessuna copertina
//!
//! La scelta è una fold sulla sequenza ordinata delle foto, calcolata una
//! sola volta alla fine.

/// Tracks converted photos and derives the cover from them
#[derive(Debug)]
pub struct CoverSelector {
    marker: String,
    /// (file name, web path) of every converted photo, in processing order
    images: Vec<(String, String)>,
}

#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    web_path: &'a str,
    marked: bool,
}

impl CoverSelector {
    pub fn new(marker: &str) -> Self {
        Self {
            marker: marker.to_lowercase(),
            images: Vec::new(),
        }
    }

    /// Record a successfully converted photo
    pub fn observe(&mut self, file_name: &str, web_path: &str) {
        self.images.push((file_name.to_string(), web_path.to_string()));
    }

    pub fn is_marked(&self, file_name: &str) -> bool {
        file_name.to_lowercase().contains(&self.marker)
    }

    /// Web path of the cover, `None` when no photo was converted
    pub fn select(&self) -> Option<String> {
        self.images
            .iter()
            .fold(None::<Candidate<'_>>, |current, (name, web_path)| match current {
                Some(c) if c.marked => Some(c),
                _ if self.is_marked(name) => Some(Candidate { web_path: web_path.as_str(), marked: true }),
                None => Some(Candidate { web_path: web_path.as_str(), marked: false }),
                keep => keep,
            })
            .map(|c| c.web_path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(names: &[&str]) -> CoverSelector {
        let mut s = CoverSelector::new("portada");
        for name in names {
            s.observe(name, &format!("/img/{}", name));
        }
        s
    }

    #[test]
    fn test_marker_wins_regardless_of_position() {
        assert_eq!(
            selector(&["A.jpg", "IMG_portada.jpg", "Z.jpg"]).select().as_deref(),
            Some("/img/IMG_portada.jpg")
        );
        assert_eq!(
            selector(&["IMG_portada.jpg", "A.jpg", "Z.jpg"]).select().as_deref(),
            Some("/img/IMG_portada.jpg")
        );
        assert_eq!(
            selector(&["A.jpg", "Z.jpg", "IMG_portada.jpg"]).select().as_deref(),
            Some("/img/IMG_portada.jpg")
        );
    }

    #[test]
    fn test_marker_is_case_insensitive_and_first_match_wins() {
        assert_eq!(
            selector(&["a.jpg", "b_PORTADA.jpg", "c_portada.jpg"]).select().as_deref(),
            Some("/img/b_PORTADA.jpg")
        );
    }

    #[test]
    fn test_first_image_without_marker() {
        assert_eq!(selector(&["a.jpg", "b.jpg"]).select().as_deref(), Some("/img/a.jpg"));
    }

    #[test]
    fn test_no_images_no_cover() {
        assert_eq!(selector(&[]).select(), None);
    }
}
