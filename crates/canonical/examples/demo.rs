use canonical::{sanitize, word_lengths, SanitizeConfig};

fn main() {
    let text = "Always enjoy new movie, tv, book, clothes and music recommendations. \
                [Photo of cat!](https://imgur.com/) for what it's worth.";

    println!("compact: {}", sanitize(text, &SanitizeConfig::default()));
    println!("spaced:  {}", sanitize(text, &SanitizeConfig::with_spaces()));
    println!("word lengths: {:?}", word_lengths(text));
}
