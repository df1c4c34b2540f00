mod definitions;

#[cfg(test)]
mod tests {
    use std::env::temp_dir;
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::Router;
    use common::config::Config;
    use common::messages::Messages;
    use platform::http::attach_routes;
    use platform::Definitions;
    use storage::JsonFile;
    use uuid::Uuid;

    pub struct TestService {
        pub base_url: String,
        pub provider: Arc<Definitions>,
        pub data_path: PathBuf,
    }

    pub fn tmp_data_path() -> PathBuf {
        let mut path = temp_dir();
        path.push(format!("{}", Uuid::new_v4()));
        path.push("dictionary.json");
        path
    }

    pub async fn run_http_service(
        data_path: PathBuf,
        path_prefix: Option<&str>,
    ) -> anyhow::Result<TestService> {
        let mut cfg = Config::default();
        cfg.server.path_prefix = path_prefix.map(|v| v.to_string());
        cfg.data.path = data_path.clone();

        let store = Arc::new(JsonFile::new(cfg.data.path.clone()));
        let provider = Arc::new(Definitions::try_new(
            store,
            Arc::new(Messages::default()),
            cfg.dictionary.timezone,
        )?);

        let router = attach_routes(Router::new(), &provider, &cfg);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move { axum::serve(listener, router).await });

        Ok(TestService {
            base_url: format!("http://{}:{}", addr.ip(), addr.port()),
            provider,
            data_path,
        })
    }

    #[macro_export]
    macro_rules! assert_response_status_eq {
        ($resp:expr,$status:expr) => {{
            assert_eq!(
                $resp.status(),
                $status,
                "{}",
                $resp.text().await.unwrap().as_str()
            )
        }};
    }

    #[macro_export]
    macro_rules! assert_response_text_eq {
        ($resp:expr, $status:expr, $body:expr) => {{
            assert_eq!($resp.status(), $status);
            assert_eq!($resp.text().await.unwrap(), $body.to_string())
        }};
    }
}
