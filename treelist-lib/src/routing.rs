//! URL generation for transport endpoints.

use ::url::Url;
use ::url::form_urlencoded;

use crate::context::RouteValues;
use crate::context::ViewContext;
use crate::error::UrlError;

/// Trait for turning route values into URLs of the hosting application.
///
/// The data source builder calls `url_for` whenever a transport operation is
/// pointed at a controller action. Implementations receive the already merged
/// route values: `controller` and `action` are always present. Ambient route
/// values of the request are available through [`ViewContext::route_values`].
///
/// # Example
///
/// ```
/// use treelist_lib::{RouteValues, UrlGenerator, ViewContext};
///
/// struct Fixed;
///
/// impl UrlGenerator for Fixed {
///     fn url_for(&self, _ctx: &ViewContext, _route: &RouteValues) -> String {
///         "/fixed".to_string()
///     }
/// }
/// ```
pub trait UrlGenerator: Send + Sync {
    /// Returns the URL for the given route values.
    fn url_for(&self, ctx: &ViewContext, route: &RouteValues) -> String;
}

/// Generates application-relative URLs: `/{controller}/{action}?{extras}`.
///
/// Useful when the grid is served from the same origin as its data.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelativeUrlGenerator;

impl UrlGenerator for RelativeUrlGenerator {
    fn url_for(&self, ctx: &ViewContext, route: &RouteValues) -> String {
        let controller = route.controller().unwrap_or(ctx.controller());
        let action = route.action_name().unwrap_or(ctx.action());

        let mut url = format!("/{}/{}", encode_segment(controller), encode_segment(action));
        let query = query_string(ctx, route);
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        url
    }
}

/// Generates absolute URLs below a fixed base URL.
///
/// The base is validated once on construction; generation itself cannot fail.
///
/// # Example
///
/// ```
/// use treelist_lib::{RouteUrlGenerator, RouteValues, UrlGenerator, ViewContext};
///
/// let generator = RouteUrlGenerator::new("https://example.com/app/").unwrap();
/// let ctx = ViewContext::new("Home", "Index");
/// let url = generator.url_for(&ctx, &RouteValues::action("Read", "Employees").with("id", "5"));
/// assert_eq!(url, "https://example.com/app/Employees/Read?id=5");
/// ```
#[derive(Debug, Clone)]
pub struct RouteUrlGenerator {
    base: Url,
}

impl RouteUrlGenerator {
    /// Creates a generator rooted at `base`.
    pub fn new(base: &str) -> Result<Self, UrlError> {
        let parsed = Url::parse(base).map_err(|e| UrlError::parse(base, e))?;
        if parsed.cannot_be_a_base() {
            return Err(UrlError::cannot_be_base(base));
        }
        Ok(Self { base: parsed })
    }

    /// Returns the base URL.
    pub fn base(&self) -> &Url {
        &self.base
    }
}

impl UrlGenerator for RouteUrlGenerator {
    fn url_for(&self, ctx: &ViewContext, route: &RouteValues) -> String {
        let controller = route.controller().unwrap_or(ctx.controller());
        let action = route.action_name().unwrap_or(ctx.action());

        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);

        // Checked in `new`, cannot-be-a-base URLs never get here.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(controller).push(action);
        }

        let query = query_string(ctx, route);
        if !query.is_empty() {
            url.set_query(Some(&query));
        }

        log::trace!("[url] {} -> {}", route_label(controller, action), url);
        url.into()
    }
}

/// Encodes every non-routing value as `application/x-www-form-urlencoded`.
///
/// Ambient values of the request are included; explicit values win.
fn query_string(ctx: &ViewContext, route: &RouteValues) -> String {
    let mut merged = ctx.route_values().clone();
    merged.merge(route);

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in merged.extras() {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

fn encode_segment(segment: &str) -> String {
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn route_label(controller: &str, action: &str) -> String {
    format!("{}.{}", controller, action)
}
