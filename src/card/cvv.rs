use super::{brand::Brand, random::RandomSource};

/// Draws a security code of the brand's length, one uniform digit at a time.
///
/// The code is unrelated to the card number.
pub fn generate_cvv<R>(brand: Brand, rng: &mut R) -> String
where
    R: RandomSource + ?Sized,
{
    (0..brand.spec().cvv_digits)
        .map(|_| char::from(b'0' + rng.next_digit()))
        .collect()
}
