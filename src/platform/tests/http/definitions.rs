#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::Utc;
    use common::messages::Messages;
    use platform::definitions::format_date;
    use platform::CreateDefinitionResponse;
    use reqwest::header::ACCESS_CONTROL_ALLOW_ORIGIN;
    use reqwest::header::CONTENT_TYPE;
    use reqwest::Client;
    use reqwest::StatusCode;
    use storage::Entry;

    use crate::assert_response_status_eq;
    use crate::assert_response_text_eq;
    use crate::http::tests::run_http_service;
    use crate::http::tests::tmp_data_path;

    const PREFIX: &str = "/COMP4537/labs/4";

    #[tokio::test]
    async fn test_definitions() {
        let svc = run_http_service(tmp_data_path(), Some(PREFIX))
            .await
            .unwrap();
        let url = format!("{}/api/definitions", svc.base_url);
        let cl = Client::new();
        let msgs = Messages::default();

        // add a word to an empty dictionary
        let date_before = format_date(Utc::now(), chrono_tz::America::Los_Angeles);
        let resp = cl
            .post(&url)
            .form(&[("word", "cat"), ("definition", "a small domesticated feline")])
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let created: CreateDefinitionResponse = resp.json().await.unwrap();
        let date_after = format_date(Utc::now(), chrono_tz::America::Los_Angeles);
        assert_eq!(created.num_req, 1);
        assert_eq!(created.total_words, 1);
        assert_eq!(created.word, "cat");
        assert_eq!(created.definition, "a small domesticated feline");
        assert!(created.date == date_before || created.date == date_after);

        // look it up
        let resp = cl
            .get(&url)
            .query(&[("word", "cat")])
            .send()
            .await
            .unwrap();
        assert!(resp.headers()[CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        assert_response_text_eq!(resp, StatusCode::OK, "a small domesticated feline");

        // missing word
        let resp = cl.get(&url).send().await.unwrap();
        assert_response_text_eq!(resp, StatusCode::BAD_REQUEST, msgs.get_req_invalid_msg);

        let resp = cl.get(format!("{url}?word=")).send().await.unwrap();
        assert_response_text_eq!(resp, StatusCode::BAD_REQUEST, msgs.get_req_invalid_msg);

        // unknown word
        let resp = cl
            .get(&url)
            .query(&[("word", "dog")])
            .send()
            .await
            .unwrap();
        assert_response_text_eq!(
            resp,
            StatusCode::NOT_FOUND,
            "Request# 5, word 'dog' not found!"
        );

        // duplicate word keeps the stored definition
        let resp = cl
            .post(&url)
            .form(&[("word", "cat"), ("definition", "x")])
            .send()
            .await
            .unwrap();
        assert_response_text_eq!(
            resp,
            StatusCode::BAD_REQUEST,
            "Warning! 'cat' already exists."
        );

        let resp = cl
            .get(&url)
            .query(&[("word", "cat")])
            .send()
            .await
            .unwrap();
        assert_response_text_eq!(resp, StatusCode::OK, "a small domesticated feline");

        // unknown path is rejected before counting
        let resp = cl
            .get(format!("{}/unknown/path", svc.base_url))
            .send()
            .await
            .unwrap();
        assert_response_text_eq!(resp, StatusCode::NOT_FOUND, msgs.endpoint_invalid_msg);
        assert_eq!(svc.provider.requests(), 7);
    }

    #[tokio::test]
    async fn test_post_invalid_fields() {
        let svc = run_http_service(tmp_data_path(), None).await.unwrap();
        let url = format!("{}/api/definitions", svc.base_url);
        let cl = Client::new();
        let msgs = Messages::default();

        for body in [
            "",
            "word=cat",
            "definition=feline",
            "word=&definition=feline",
            "word=cat&definition=",
        ] {
            let resp = cl
                .post(&url)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(body)
                .send()
                .await
                .unwrap();
            assert_response_text_eq!(resp, StatusCode::BAD_REQUEST, msgs.post_req_invalid_msg);
        }
        assert!(svc.provider.is_empty().await);
        assert_eq!(svc.provider.requests(), 5);
    }

    #[tokio::test]
    async fn test_post_without_content_type() {
        let svc = run_http_service(tmp_data_path(), None).await.unwrap();
        let url = format!("{}/api/definitions/", svc.base_url);
        let cl = Client::new();

        let resp = cl
            .post(&url)
            .body("word=ice+cream&definition=a%20frozen%20dessert")
            .send()
            .await
            .unwrap();
        assert_response_status_eq!(resp, StatusCode::OK);

        let resp = cl
            .get(&url)
            .query(&[("word", "ice cream")])
            .send()
            .await
            .unwrap();
        assert_response_text_eq!(resp, StatusCode::OK, "a frozen dessert");
    }

    #[tokio::test]
    async fn test_words_are_sorted_and_persisted() {
        let data_path = tmp_data_path();
        let svc = run_http_service(data_path.clone(), None).await.unwrap();
        let url = format!("{}/api/definitions", svc.base_url);
        let cl = Client::new();

        for (i, word) in ["pear", "apple", "zebra", "banana"].iter().enumerate() {
            let resp = cl
                .post(&url)
                .form(&[("word", *word), ("definition", "fruit or not")])
                .send()
                .await
                .unwrap();
            let created: CreateDefinitionResponse = resp.json().await.unwrap();
            assert_eq!(created.total_words, i + 1);
        }

        let stored: Vec<Entry> =
            serde_json::from_str(&fs::read_to_string(&svc.data_path).unwrap()).unwrap();
        let words: Vec<&str> = stored.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["apple", "banana", "pear", "zebra"]);
        assert_eq!(stored, svc.provider.entries().await);

        // a fresh service picks up the file, with a fresh counter
        let svc = run_http_service(data_path, None).await.unwrap();
        let resp = cl
            .get(format!("{}/api/definitions", svc.base_url))
            .query(&[("word", "zebra")])
            .send()
            .await
            .unwrap();
        assert_response_text_eq!(resp, StatusCode::OK, "fruit or not");
        assert_eq!(svc.provider.requests(), 1);
    }

    #[tokio::test]
    async fn test_path_prefix() {
        let svc = run_http_service(tmp_data_path(), Some(PREFIX))
            .await
            .unwrap();
        let cl = Client::new();
        let msgs = Messages::default();

        let resp = cl
            .post(format!("{}{PREFIX}/api/definitions/", svc.base_url))
            .form(&[("word", "cat"), ("definition", "feline")])
            .send()
            .await
            .unwrap();
        assert_response_status_eq!(resp, StatusCode::OK);

        for path in ["/api/definitions", "/api/definitions/"] {
            let resp = cl
                .get(format!("{}{PREFIX}{path}?word=cat", svc.base_url))
                .send()
                .await
                .unwrap();
            assert_response_text_eq!(resp, StatusCode::OK, "feline");
        }

        for path in [
            "/",
            "/api",
            "/api/definitions/cat",
            "/COMP4537/labs/4",
            "/COMP4537/labs/4/api/other",
            "/COMP4537/labs/5/api/definitions",
        ] {
            let resp = cl
                .get(format!("{}{path}", svc.base_url))
                .send()
                .await
                .unwrap();
            assert_response_text_eq!(resp, StatusCode::NOT_FOUND, msgs.endpoint_invalid_msg);
        }
        assert_eq!(svc.provider.requests(), 3);

        // prefix disabled
        let svc = run_http_service(tmp_data_path(), None).await.unwrap();
        let resp = cl
            .get(format!("{}{PREFIX}/api/definitions?word=cat", svc.base_url))
            .send()
            .await
            .unwrap();
        assert_response_text_eq!(resp, StatusCode::NOT_FOUND, msgs.endpoint_invalid_msg);
        assert_eq!(svc.provider.requests(), 0);
    }

    #[tokio::test]
    async fn test_cors_header() {
        let svc = run_http_service(tmp_data_path(), None).await.unwrap();
        let cl = Client::new();

        for (path, status) in [
            ("/api/definitions?word=cat", StatusCode::NOT_FOUND),
            ("/api/definitions", StatusCode::BAD_REQUEST),
            ("/unknown/path", StatusCode::NOT_FOUND),
        ] {
            let resp = cl
                .get(format!("{}{path}", svc.base_url))
                .header("origin", "https://example.com")
                .send()
                .await
                .unwrap();
            assert_eq!(resp.status(), status);
            assert_eq!(resp.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        }

        let resp = cl
            .post(format!("{}/api/definitions", svc.base_url))
            .form(&[("word", "cat"), ("definition", "feline")])
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn test_unsupported_method_is_counted() {
        let svc = run_http_service(tmp_data_path(), None).await.unwrap();
        let url = format!("{}/api/definitions", svc.base_url);
        let cl = Client::new();

        let resp = cl.get(&url).query(&[("word", "dog")]).send().await.unwrap();
        assert_response_text_eq!(resp, StatusCode::NOT_FOUND, "Request# 1, word 'dog' not found!");

        let resp = cl.put(&url).body("word=dog").send().await.unwrap();
        assert_response_status_eq!(resp, StatusCode::METHOD_NOT_ALLOWED);

        let resp = cl.delete(&url).send().await.unwrap();
        assert_response_status_eq!(resp, StatusCode::METHOD_NOT_ALLOWED);

        let resp = cl.get(&url).query(&[("word", "dog")]).send().await.unwrap();
        assert_response_text_eq!(resp, StatusCode::NOT_FOUND, "Request# 4, word 'dog' not found!");
        assert!(svc.provider.is_empty().await);
    }
}
