//! Debug script to exercise the provider URL resolver
//!
//! Run with: cargo run --example resolve_url -p reelport-core

use reelport_core::resolver::{convert_to_embeddable, detect_provider, extract_youtube_id};

fn main() {
    let samples = [
        "https://youtu.be/dQw4w9WgXcQ",
        "https://www.youtube.com/watch?v=abc12345678&t=42s",
        "https://drive.google.com/file/d/1A2b3C4d5E/view?usp=sharing",
        "https://vimeo.com/123456789",
        "https://www.dailymotion.com/video/x8abcde_some-seo-slug",
        "https://cdn.example/movie.mp4",
        "not a url at all",
    ];

    for url in samples {
        println!("input:    {url}");
        println!("provider: {:?}", detect_provider(url));
        println!("embed:    {}", convert_to_embeddable(url));
        if let Some(id) = extract_youtube_id(url) {
            println!("yt id:    {id}");
        }
        println!();
    }
}
