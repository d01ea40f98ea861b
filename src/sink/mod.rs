//! Form persistence sink

mod file;
mod traits;

pub use file::*;
pub use traits::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{new_field, FieldType, FormData};

    #[tokio::test]
    async fn test_mock_sink_receives_saved_document() {
        let form = FormData::default().insert_top_level(new_field(FieldType::Email));
        let expected = form.clone();

        let mut mock = MockFormSink::new();
        mock.expect_save()
            .withf(move |f| *f == expected)
            .times(1)
            .returning(|_| Ok(()));

        mock.save(&form).await.unwrap();
    }

    #[tokio::test]
    async fn test_mock_sink_load_returns_document() {
        let form = FormData::default().insert_top_level(new_field(FieldType::Text));
        let stored = form.clone();

        let mut mock = MockFormSink::new();
        mock.expect_load()
            .times(1)
            .returning(move || Ok(Some(stored.clone())));

        let loaded = mock.load().await.unwrap().unwrap();
        assert_eq!(loaded, form);
    }
}
