use serde::Deserialize;
use validator::Validate;

use crate::model::NewPost;

/// The creation form, one field per column the visitor controls.
///
/// Missing fields deserialize as empty strings so an incomplete
/// submission fails validation with a field message instead of being
/// rejected by the extractor.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct BlogForm {
	#[validate(length(min = 1, message = "This field is required."))]
	pub title: String,
	#[validate(length(min = 1, message = "This field is required."))]
	pub author: String,
	#[validate(length(min = 1, message = "This field is required."))]
	pub text: String,
}

impl BlogForm {
	pub fn into_post(self) -> NewPost {
		NewPost {
			title: self.title,
			text: self.text,
			author: self.author,
		}
	}
}
