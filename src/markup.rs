//! HTML fragments embedded in the post body.
//!
//! Attribute values go through `maud`, so file names with quotes or
//! ampersands cannot break the generated markup.

use maud::{html, Markup, PreEscaped};

/// Lazy-loaded photo, alt text is the original file name
pub fn image_tag(web_path: &str, alt: &str) -> Markup {
    html! {
        img src=(web_path) alt=(alt) loading="lazy";
    }
}

/// Silent looping clip that behaves like an animated photo
pub fn video_tag(web_path: &str) -> Markup {
    html! {
        video src=(web_path) autoplay loop muted playsinline preload="metadata" {}
    }
}

/// Wrap already rendered fragments in the gallery container
pub fn gallery_block(class: &str, fragments: &str) -> Markup {
    html! {
        div class=(class) {
            (PreEscaped(fragments))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_tag() {
        let tag = image_tag("/assets/img/a.jpg", "a.jpg").into_string();
        assert_eq!(tag, r#"<img src="/assets/img/a.jpg" alt="a.jpg" loading="lazy">"#);
    }

    #[test]
    fn test_video_tag() {
        let tag = video_tag("/assets/img/clip.mp4").into_string();
        assert_eq!(
            tag,
            r#"<video src="/assets/img/clip.mp4" autoplay loop muted playsinline preload="metadata"></video>"#
        );
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let tag = image_tag("/a/x\".jpg", "Tom & \"Jerry\".jpg").into_string();
        assert!(tag.contains("alt=\"Tom &amp; &quot;Jerry&quot;.jpg\""));
        assert!(!tag.contains("x\".jpg"));
    }

    #[test]
    fn test_gallery_block_keeps_fragments_verbatim() {
        let block = gallery_block("galeria-dinamica", "<img src=\"/a.jpg\">").into_string();
        assert_eq!(block, r#"<div class="galeria-dinamica"><img src="/a.jpg"></div>"#);
    }
}
