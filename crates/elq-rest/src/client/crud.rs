use eloqua_client::RequestMethod;
use serde_json::{Map, Value};
use tracing::instrument;

use crate::error::{Error, Result};
use crate::page::Page;
use crate::record::{Operation, Record, RecordType};

impl super::EloquaRestClient {
    /// Fetch one record by id.
    ///
    /// `params` (a JSON object, or `None`) is sent as the query string on top
    /// of the type's defaults; caller values win.
    #[instrument(skip(self, record_type, params))]
    pub async fn get<T: RecordType>(
        &self,
        record_type: &T,
        id: &str,
        params: Option<&Value>,
    ) -> Result<T::Record> {
        let path = record_type.path(Operation::Get, Some(id))?;
        let query = merge_params(record_type.default_params(Operation::Get), params)?;
        let body = self.send(RequestMethod::Get, &path, query).await?;
        record_type.decode(body)
    }

    /// Fetch one page of records.
    ///
    /// Paging and searching go through `params`, e.g.
    /// `{"page": 2, "count": 100, "search": "name=Signup*"}`.
    #[instrument(skip(self, record_type, params))]
    pub async fn get_list<T: RecordType>(
        &self,
        record_type: &T,
        params: Option<&Value>,
    ) -> Result<Page<T::Record>> {
        let path = record_type.path(Operation::List, None)?;
        let query = merge_params(record_type.default_params(Operation::List), params)?;
        let body = self.send(RequestMethod::Get, &path, query).await?;
        record_type.decode_list(body)
    }

    /// Create a record and return what the server stored, new id included.
    #[instrument(skip(self, record))]
    pub async fn create<R: Record>(&self, record: &R) -> Result<R> {
        let record_type = record.record_type();
        let path = record_type.path(Operation::Create, None)?;
        let body = record.to_create_json();
        let created: Value = self.inner().post_json(&path, &body).await?;
        record_type.decode(created)
    }

    /// Send a record's update body. Returns the response body as parsed
    /// JSON (`null` when empty).
    #[instrument(skip(self, record), fields(id = record.id().unwrap_or_default()))]
    pub async fn update<R: Record>(&self, record: &R) -> Result<Value> {
        let path = record.record_type().path(Operation::Update, record.id())?;
        let body = record.to_update_json()?;
        self.inner()
            .put_json(&path, &body)
            .await
            .map_err(Into::into)
    }

    /// Delete a record. Returns the response body as parsed JSON (`null`
    /// when empty).
    #[instrument(skip(self, record), fields(id = record.id().unwrap_or_default()))]
    pub async fn delete<R: Record>(&self, record: &R) -> Result<Value> {
        let path = record.record_type().path(Operation::Delete, record.id())?;
        self.inner()
            .delete_request(&path)
            .await
            .map_err(Into::into)
    }

    async fn send(
        &self,
        method: RequestMethod,
        path: &str,
        query: Map<String, Value>,
    ) -> Result<Value> {
        let payload = (!query.is_empty()).then(|| Value::Object(query));
        self.inner()
            .request(method, path, payload.as_ref())
            .await?
            .json::<Value>()
            .await
            .map_err(Into::into)
    }
}

/// Lay caller parameters over the defaults.
fn merge_params(
    mut defaults: Map<String, Value>,
    params: Option<&Value>,
) -> Result<Map<String, Value>> {
    match params {
        None | Some(Value::Null) => Ok(defaults),
        Some(Value::Object(params)) => {
            for (key, value) in params {
                defaults.insert(key.clone(), value.clone());
            }
            Ok(defaults)
        }
        Some(other) => Err(Error::invalid_usage(format!(
            "query parameters must be a JSON object, got {other}"
        ))),
    }
}
