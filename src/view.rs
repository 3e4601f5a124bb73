//! Server-rendered HTML pages.
//!
//! There is no template engine; each page is a fixed layout assembled
//! with `format!`. Anything that originated as user input is escaped
//! before interpolation, element content with [`encode_minimal`] and
//! attribute values with [`encode_attribute`].

use axum::response::Html;
use htmlescape::{encode_attribute, encode_minimal};
use validator::ValidationErrors;

use crate::{model::Post, route::blog::model::BlogForm};

fn layout(title: &str, body: &str) -> Html<String> {
	Html(format!(
		r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<nav><a href="/blogs">Blogs</a> | <a href="/create">Create</a> | <a href="/contact">Contact</a></nav>
{body}</body>
</html>
"#,
		title = encode_minimal(title),
	))
}

fn date(post: &Post) -> String {
	post.blog_date
		.map(|date| date.format("%Y-%m-%d %H:%M:%S").to_string())
		.unwrap_or_default()
}

fn error_span(errors: Option<&ValidationErrors>, field: &str) -> String {
	errors
		.and_then(|errors| errors.field_errors().get(field).copied())
		.and_then(|errors| errors.first())
		.and_then(|error| error.message.as_deref())
		.map(|message| format!("<span class=\"error\">{}</span>\n", encode_minimal(message)))
		.unwrap_or_default()
}

/// The listing page, posts newest first.
pub fn blogs(posts: &[Post]) -> Html<String> {
	let mut body = String::from("<h1>Blogs</h1>\n");

	for post in posts {
		body.push_str(&format!(
			concat!(
				"<article>\n",
				"<h2><a href=\"/blog/{id}\">{title}</a></h2>\n",
				"<p class=\"meta\">by {author} on {date}</p>\n",
				"<p>{text}</p>\n",
				"<a href=\"/delete/{id}\">Delete</a>\n",
				"</article>\n",
			),
			id = post.id,
			title = encode_minimal(&post.title),
			author = encode_minimal(&post.author),
			date = date(post),
			text = encode_minimal(&post.text),
		));
	}

	layout("Blogs", &body)
}

/// The detail page. A missing post renders an explanatory body rather
/// than an error response.
pub fn single(post: Option<&Post>) -> Html<String> {
	let Some(post) = post else {
		return layout("Blog", "<h1>This blog entry does not exist.</h1>\n");
	};

	let body = format!(
		concat!(
			"<article>\n",
			"<h1>{title}</h1>\n",
			"<p class=\"meta\">by {author} on {date}</p>\n",
			"<p>{text}</p>\n",
			"</article>\n",
		),
		title = encode_minimal(&post.title),
		author = encode_minimal(&post.author),
		date = date(post),
		text = encode_minimal(&post.text),
	);

	layout(&post.title, &body)
}

/// The creation form, re-rendered with the submitted values and
/// per-field messages when validation fails.
pub fn create(form: &BlogForm, errors: Option<&ValidationErrors>) -> Html<String> {
	let body = format!(
		concat!(
			"<h1>Create Blog</h1>\n",
			"<form method=\"post\" action=\"/create\">\n",
			"<label>Title <input type=\"text\" name=\"title\" value=\"{title}\"></label>\n",
			"{title_error}",
			"<label>Author <input type=\"text\" name=\"author\" value=\"{author}\"></label>\n",
			"{author_error}",
			"<label>Text <textarea name=\"text\">{text}</textarea></label>\n",
			"{text_error}",
			"<button type=\"submit\">Create</button>\n",
			"</form>\n",
		),
		title = encode_attribute(&form.title),
		title_error = error_span(errors, "title"),
		author = encode_attribute(&form.author),
		author_error = error_span(errors, "author"),
		text = encode_minimal(&form.text),
		text_error = error_span(errors, "text"),
	);

	layout("Create Blog", &body)
}

/// The static contact page.
pub fn contact() -> Html<String> {
	layout(
		"Contact",
		concat!(
			"<h1>Contact</h1>\n",
			"<p>This little blog is a showcase application. Drop the author a ",
			"line if you run into trouble with it.</p>\n",
		),
	)
}
