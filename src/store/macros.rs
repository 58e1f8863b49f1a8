#[macro_export]
macro_rules! impl_store {
    ($($name:ty),+ $(,)?) => ($(
        #[async_trait::async_trait]
        impl $crate::store::Store for $name {
            async fn new() -> anyhow::Result<Self> {
                use anyhow::Context as _;
                use $crate::store::Storable as _;

                let path = Self::path()?;

                if tokio::fs::metadata(&path).await.is_err() {
                    log::debug!("No store at {}, creating one", path.display());

                    return <Self as $crate::store::Store>::save(&Self::default()).await;
                }

                let buffer = tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("Error reading {}", path.display()))?;

                serde_json::from_str(&buffer)
                    .with_context(|| format!("Failed to deserialize {}", path.display()))
            }

            async fn save(&self) -> anyhow::Result<Self> {
                use anyhow::Context as _;
                use $crate::store::Storable as _;

                let path = Self::path()?;

                tokio::fs::create_dir_all(path.parent().context("Failed to get store directory")?)
                    .await
                    .context("Failed to create store directory")?;

                let content = serde_json::to_string(&self).context("Failed to serialize")?;

                tokio::fs::write(&path, content)
                    .await
                    .with_context(|| format!("Failed to write {}", path.display()))?;

                Ok(self.clone())
            }
        }
    )+)
}
