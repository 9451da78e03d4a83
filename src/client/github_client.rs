use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::constants::{self, FIELD_DEFINITION_FIELDS, GITHUB_API_URL, PAGE_SIZE, PROJECT_ITEM_FIELDS};
use crate::error::{GitHubError, GitHubResult};
use crate::github_error;
use crate::models::graphql::{OrganizationProjectData, UserProjectData};
use crate::models::{GraphQLResponse, ItemsPage};
use crate::projection::{ProjectOwner, ProjectQuery, ProjectsTransport};

pub struct GitHubClient {
    client: reqwest::Client,
}

impl GitHubClient {
    pub fn new(api_token: String) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(constants::USER_AGENT));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_token))
                .expect("Invalid API token format"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    async fn execute_query<T: for<'de> Deserialize<'de>>(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> GitHubResult<T> {
        let body = match variables {
            Some(vars) => json!({ "query": query, "variables": vars }),
            None => json!({ "query": query }),
        };

        let response = self.client.post(GITHUB_API_URL).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(github_error!(ApiError, "HTTP error: {}", response.status()));
        }

        let graphql_response: GraphQLResponse<T> = response.json().await?;

        if let Some(errors) = graphql_response.errors {
            let error_messages: Vec<String> = errors.iter().map(|e| e.message.clone()).collect();
            return Err(github_error!(GraphQLError, "{}", error_messages.join(", ")));
        }

        graphql_response
            .data
            .ok_or_else(|| github_error!(ApiError, "No data returned from GraphQL query"))
    }

    fn items_query(owner_type: &str) -> String {
        format!(
            r#"
            query($login: String!, $number: Int!, $cursor: String) {{
                {owner_type}(login: $login) {{
                    projectV2(number: $number) {{
                        fields(first: 100) {{
                            nodes {{{FIELD_DEFINITION_FIELDS}}}
                        }}
                        items(first: {PAGE_SIZE}, after: $cursor) {{
                            nodes {{{PROJECT_ITEM_FIELDS}}}
                            pageInfo {{
                                hasNextPage
                                endCursor
                            }}
                        }}
                    }}
                }}
            }}
            "#
        )
    }

}

impl ProjectsTransport for GitHubClient {
    async fn fetch_items_page(
        &self,
        query: &ProjectQuery,
        cursor: Option<&str>,
    ) -> GitHubResult<ItemsPage> {
        let variables = json!({
            "login": query.owner,
            "number": query.number,
            "cursor": cursor,
        });

        let project = match query.kind {
            ProjectOwner::Organization => {
                let data: OrganizationProjectData = self
                    .execute_query(&Self::items_query("organization"), Some(variables))
                    .await?;
                data.organization.project
            }
            ProjectOwner::User => {
                let data: UserProjectData = self
                    .execute_query(&Self::items_query("user"), Some(variables))
                    .await?;
                data.user.project
            }
        };

        let project = project.ok_or_else(|| {
            github_error!(
                ApiError,
                "Project {} not found for '{}'",
                query.number,
                query.owner
            )
        })?;

        Ok(project.into())
    }
}
