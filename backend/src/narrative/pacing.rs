use std::convert::Infallible;
use std::time::Duration;

use actix_web::web::Bytes;
use futures::{Stream, StreamExt};

/// Fixed inter-word delay for the reveal effect.
pub const WORD_DELAY: Duration = Duration::from_millis(80);

/// Re-emits generated text one word at a time at a constant pace. Purely
/// presentational; the full text already exists when this is called.
pub fn pace_words(text: String) -> impl Stream<Item = Result<Bytes, Infallible>> {
    let words: Vec<String> = text
        .split_whitespace()
        .map(|word| format!("{word} "))
        .collect();

    futures::stream::iter(words).then(|word| async move {
        tokio::time::sleep(WORD_DELAY).await;
        Ok::<_, Infallible>(Bytes::from(word))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn emits_every_word_in_order() {
        let chunks: Vec<_> = pace_words("recycle the can".into()).collect().await;
        let text: String = chunks
            .into_iter()
            .map(|chunk| String::from_utf8(chunk.unwrap().to_vec()).unwrap())
            .collect();
        assert_eq!(text, "recycle the can ");
    }

    #[tokio::test]
    async fn empty_text_yields_no_chunks() {
        let chunks: Vec<_> = pace_words(String::new()).collect().await;
        assert!(chunks.is_empty());
    }
}
