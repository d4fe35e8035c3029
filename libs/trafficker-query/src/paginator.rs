// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use tracing::debug;

use crate::{EntityPage, FilterStatement, QueryService, SUGGESTED_PAGE_LIMIT, ServiceError};

/// Retrieves every entity matching a statement, page by page.
///
/// Pages are fetched strictly one after another: the offset of each request depends on the
/// previous page having been consumed. After every page with results the statement's offset grows
/// by exactly the page size, so against a dataset that doesn't change during the query the
/// accumulated results have neither gaps nor duplicates.
///
/// Paging stops at the first response without a results collection. A present but empty
/// collection is not a stop signal. If the remote dataset shrinks while a query
/// is in progress, rows may be skipped or paging may end early; this is not detected.
pub struct Paginator<'a, S: ?Sized> {
    service: &'a S,
    page_size: usize,
}

impl<'a, S> Paginator<'a, S>
where
    S: QueryService + ?Sized,
{
    pub fn new(service: &'a S) -> Self {
        Self {
            service,
            page_size: SUGGESTED_PAGE_LIMIT,
        }
    }

    /// Override the page size. It must match the remote page-size ceiling.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Fetch all pages, returning the results in server order
    pub async fn fetch_all(
        &self,
        statement: &mut FilterStatement,
    ) -> Result<Vec<S::Entity>, ServiceError> {
        self.fetch_all_inspect(statement, |_| {}).await
    }

    /// Like [`Self::fetch_all`], but hands each page to `inspect` as soon as it arrives
    pub async fn fetch_all_inspect<F>(
        &self,
        statement: &mut FilterStatement,
        mut inspect: F,
    ) -> Result<Vec<S::Entity>, ServiceError>
    where
        F: FnMut(&[S::Entity]),
    {
        statement.offset = 0;
        statement.limit = self.page_size;

        let mut accumulated = Vec::new();

        loop {
            let page = self
                .service
                .get_by_statement(&statement.to_statement())
                .await?;

            match page {
                EntityPage::Results(results) => {
                    debug!(
                        offset = statement.offset,
                        count = results.len(),
                        "Fetched page"
                    );
                    inspect(&results);
                    accumulated.extend(results);
                    statement.offset += self.page_size;
                }
                EntityPage::Exhausted => {
                    debug!(
                        offset = statement.offset,
                        total = accumulated.len(),
                        "No further results"
                    );
                    break;
                }
            }
        }

        Ok(accumulated)
    }
}
