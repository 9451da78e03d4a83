use crate::error::GitHubResult;
use crate::logging;
use crate::models::{Field, ItemsPage, ProjectItem};

/// Whether the project hangs off an organization or a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectOwner {
    Organization,
    User,
}

/// Identifies one project board to walk.
#[derive(Debug, Clone)]
pub struct ProjectQuery {
    pub owner: String,
    pub number: i64,
    pub kind: ProjectOwner,
}

/// The remote call that fills one page. Implemented by the GraphQL client and
/// by scripted mocks in tests.
#[allow(async_fn_in_trait)]
pub trait ProjectsTransport {
    async fn fetch_items_page(
        &self,
        query: &ProjectQuery,
        cursor: Option<&str>,
    ) -> GitHubResult<ItemsPage>;
}

/// Everything a completed walk produced. Field definitions come from page 1
/// only; `truncated` distinguishes "hit the page cap" from "no more pages".
#[derive(Debug)]
pub struct WalkedProject {
    pub fields: Vec<Field>,
    pub items: Vec<ProjectItem>,
    pub truncated: bool,
}

/// Drives cursor pagination until the server reports no further page or the
/// page cap is reached. Any transport error aborts the whole walk; partial
/// pages are never merged into a result. Dropping the returned future between
/// fetches likewise discards all partial state.
pub struct PageWalker<'a, T: ProjectsTransport> {
    transport: &'a T,
    max_pages: usize,
}

impl<'a, T: ProjectsTransport> PageWalker<'a, T> {
    pub fn new(transport: &'a T, max_pages: usize) -> Self {
        PageWalker {
            transport,
            max_pages: max_pages.max(1),
        }
    }

    pub async fn walk(&self, query: &ProjectQuery) -> GitHubResult<WalkedProject> {
        let mut fields = Vec::new();
        let mut items = Vec::new();
        let mut cursor: Option<String> = None;
        let mut truncated = false;
        let mut pages = 0;

        loop {
            let page = self
                .transport
                .fetch_items_page(query, cursor.as_deref())
                .await?;

            if pages == 0 {
                fields = page.fields;
            }
            items.extend(page.items);
            pages += 1;

            if !page.page_info.has_next_page {
                break;
            }

            if pages >= self.max_pages {
                truncated = true;
                logging::log_info(&format!(
                    "pagination for project {}/{} stopped at cap of {} pages",
                    query.owner, query.number, self.max_pages
                ));
                break;
            }

            match page.page_info.end_cursor {
                Some(next) => cursor = Some(next),
                None => {
                    // hasNextPage without a cursor would loop on page 1
                    logging::log_debug(&format!(
                        "project {}/{} reported another page but no cursor; stopping",
                        query.owner, query.number
                    ));
                    break;
                }
            }
        }

        Ok(WalkedProject {
            fields,
            items,
            truncated,
        })
    }
}
