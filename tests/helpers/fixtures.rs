use std::sync::Arc;

use pkgdoc::docs::extract;
use pkgdoc::Doc;

/// Saved pkg.go.dev page of the `strings` package (trimmed)
pub const STRINGS_PAGE: &str = include_str!("../fixtures/strings.html");

pub const STRINGS_URL: &str = "https://pkg.go.dev/strings";

/// Small page for a nested import path
pub const NET_HTTP_PAGE: &str = r#"<html><body>
<section class="Documentation-overview"><p>Package http provides HTTP client and server implementations.</p></section>
<div class="Documentation-function"><pre>func Get(url string) (resp *Response, err error)</pre><p>Get issues a GET to the specified URL.</p></div>
<div class="Documentation-type"><pre>type Client struct {
	Timeout time.Duration
}</pre><p>A Client is an HTTP client.</p>
<div class="Documentation-typeMethod"><pre>func (c *Client) Do(req *Request) (*Response, error)</pre><p>Do sends an HTTP request and returns an HTTP response.</p></div>
</div>
</body></html>"#;

/// A package with functions but no exported types
pub const ERRORS_PAGE: &str = r#"<html><body>
<section class="Documentation-overview"><p>Package errors implements functions to manipulate errors.</p></section>
<div class="Documentation-function"><pre>func New(text string) error</pre><p>New returns an error that formats as the given text.</p></div>
<div class="Documentation-function"><pre>func Is(err, target error) bool</pre><p>Is reports whether any error in err's tree matches target.</p></div>
</body></html>"#;

/// The `strings` fixture extracted into a [`Doc`]
pub fn strings_doc() -> Arc<Doc> {
    Arc::new(extract(STRINGS_PAGE, STRINGS_URL, "strings"))
}
