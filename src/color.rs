use image::Rgb;
use rand::Rng;

/// One pixel in RGB space.
pub type Color = Rgb<u8>;

/// Euclidean distance between two colors.
pub fn distance(a: &Color, b: &Color) -> f64 {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(&x, &y)| (x as f64 - y as f64).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Each channel drawn independently and uniformly over 0..=255.
pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Rgb([rng.random(), rng.random(), rng.random()])
}
