use http::{Method, Request as HttpRequest};

/// Minimal view of an incoming request the router needs: a path and a method.
pub trait RouteRequest {
    /// Path component of the request target, without query string or host.
    fn path(&self) -> &str;

    fn method(&self) -> &Method;
}

/// Plain request descriptor for callers without a full HTTP stack.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub path: String,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }
}

impl RouteRequest for Request {
    fn path(&self) -> &str {
        &self.path
    }

    fn method(&self) -> &Method {
        &self.method
    }
}

impl<B> RouteRequest for HttpRequest<B> {
    fn path(&self) -> &str {
        self.uri().path()
    }

    fn method(&self) -> &Method {
        HttpRequest::method(self)
    }
}
