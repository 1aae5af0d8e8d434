//! REST Transport
//!
//! `TaskApi` over HTTP with reqwest (fetch on wasm32, hyper natively).
//!
//! | Operation | Request |
//! |---|---|
//! | list | `GET /tasks` |
//! | create | `POST /tasks` `{content}` |
//! | update | `PUT /tasks/{id}` `{completed}` |
//! | delete | `DELETE /tasks/{id}` |

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use url::Url;

use crate::api::TaskApi;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{CompletionBody, NewTaskBody, Task, TaskId};

const TASKS_SEGMENT: &str = "tasks";

/// HTTP client for the task collection endpoint
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    http_client: Client,
    base_url: Url,
}

impl HttpTaskApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http_client: Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `<base>/tasks` or `<base>/tasks/<id>`
    fn endpoint(&self, id: Option<&TaskId>) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::Endpoint(self.base_url.to_string()))?;
            segments.pop_if_empty().push(TASKS_SEGMENT);
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, id: Option<&TaskId>) -> ApiResult<RequestBuilder> {
        let url = self.endpoint(id)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send and require a 2xx status; the body is left unread.
    async fn send(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        let builder = self.request(Method::GET, None)?;
        let body = self.send(builder).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn create_task(&self, content: &str) -> ApiResult<()> {
        let builder = self
            .request(Method::POST, None)?
            .json(&NewTaskBody { content });
        self.send(builder).await?;
        Ok(())
    }

    async fn set_completed(&self, id: &TaskId, completed: bool) -> ApiResult<()> {
        let builder = self
            .request(Method::PUT, Some(id))?
            .json(&CompletionBody { completed });
        self.send(builder).await?;
        Ok(())
    }

    async fn delete_task(&self, id: &TaskId) -> ApiResult<()> {
        let builder = self.request(Method::DELETE, Some(id))?;
        self.send(builder).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_for(server: &MockServer) -> HttpTaskApi {
        HttpTaskApi::new(&ClientConfig::new(&server.uri()).unwrap())
    }

    #[test]
    fn test_endpoint_with_path_prefix() {
        let config = ClientConfig::new("http://localhost:5000/api/").unwrap();
        let api = HttpTaskApi::new(&config);

        assert_eq!(
            api.endpoint(None).unwrap().as_str(),
            "http://localhost:5000/api/tasks"
        );
        assert_eq!(
            api.endpoint(Some(&TaskId::Number(3))).unwrap().as_str(),
            "http://localhost:5000/api/tasks/3"
        );
    }

    #[test]
    fn test_endpoint_encodes_text_id() {
        let api = HttpTaskApi::new(&ClientConfig::default());
        let url = api.endpoint(Some(&TaskId::from("a b/c"))).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/tasks/a%20b%2Fc");
    }

    #[tokio::test]
    async fn test_list_tasks() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 2, "content": "second", "completed": 1},
                {"id": 1, "content": "first", "completed": false},
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let tasks = api_for(&server).list_tasks().await.unwrap();

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, TaskId::Number(2));
        assert_eq!(tasks[0].content, "second");
        assert!(tasks[0].completed);
        assert_eq!(tasks[1].content, "first");
    }

    #[tokio::test]
    async fn test_list_tasks_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!([])))
            .mount(&server)
            .await;

        let err = api_for(&server).list_tasks().await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500 }));
    }

    #[tokio::test]
    async fn test_list_tasks_bad_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = api_for(&server).list_tasks().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_create_task() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tasks"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"content": "buy milk"})))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"message": "Task added successfully!"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        api_for(&server).create_task("buy milk").await.unwrap();
    }

    #[tokio::test]
    async fn test_set_completed() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/tasks/1"))
            .and(body_json(json!({"completed": true})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        api_for(&server)
            .set_completed(&TaskId::Number(1), true)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_task_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/tasks/9"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let err = api_for(&server)
            .delete_task(&TaskId::Number(9))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404 }));
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let api = HttpTaskApi::new(&ClientConfig::new("http://127.0.0.1:1").unwrap());

        let err = api.list_tasks().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
