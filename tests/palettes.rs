use fractal_palette::{
    fixed_random_palette, mandelbrot_palette, random_palette, Entry, PaletteKind, Rgb,
};

#[test]
fn test_lengths_for_every_generator() {
    for max in [0usize, 1, 2, 255, 256, 513] {
        assert_eq!(random_palette(max).len(), max);
        assert_eq!(fixed_random_palette(max).len(), max);
        assert_eq!(mandelbrot_palette(max).len(), max);
    }
}

#[test]
fn test_hex_entries_parse_back() {
    for entry in fixed_random_palette(100).iter().chain(&random_palette(100)) {
        assert_eq!(entry.len(), 7, "{}", entry);
        let parsed: Entry = entry.parse().unwrap();
        assert!(matches!(parsed, Entry::Hex(_)));
        assert_eq!(&parsed.to_string(), entry);
    }
}

#[test]
fn test_gradient_entries_parse_back() {
    for entry in mandelbrot_palette(1024) {
        assert!(entry.starts_with("rgba(") && entry.ends_with(",255)"), "{}", entry);
        let parsed: Entry = entry.parse().unwrap();
        assert_eq!(parsed.to_string(), entry);
    }
}

#[test]
fn test_fixed_palette_matches_known_values() {
    let palette = PaletteKind::FixedRandom.generate(2);
    let rgb: Vec<Rgb> = palette.entries().iter().map(Entry::rgb).collect();
    assert_eq!(rgb, vec![Rgb::new(51, 249, 193), Rgb::new(216, 221, 149)]);
}

#[test]
fn test_lookup_by_escape_iteration() {
    let palette = PaletteKind::Mandelbrot.generate(256);
    let first = palette.entry_for(0).unwrap().to_string();
    assert_eq!(first, "rgba(128,0,154,255)");
    assert_eq!(palette.entry_for(256).unwrap().to_string(), first);
    assert_eq!(palette.to_rgb()[1], (132, 4, 150));
}
