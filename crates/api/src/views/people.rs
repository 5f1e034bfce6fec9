//! Pages for the actors and directors resources: index, show, new and edit.

use filmcrew_core::people::PersonKind;
use filmcrew_core::validation::{FieldError, DATE_FORMAT};
use filmcrew_db::models::person::Person;

use super::{escape, layout, notice};
use crate::forms::PersonForm;

fn opt_text(value: Option<&str>) -> String {
    value.map(escape).unwrap_or_default()
}

fn dob_text(person: &Person) -> String {
    person
        .dob
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// A POST form that tunnels `DELETE` and asks for confirmation first.
fn destroy_button(action: &str) -> String {
    format!(
        r#"<form class="button_to" method="post" action="{action}" onsubmit="return confirm('Are you sure?');"><input type="hidden" name="_method" value="delete"><button type="submit">Destroy</button></form>"#,
        action = escape(action),
    )
}

/// `GET /{people}`
pub fn index(kind: PersonKind, people: &[Person], notice_msg: Option<&str>) -> String {
    let mut rows = String::new();
    for person in people {
        let path = kind.member_path(person.id);
        rows.push_str(&format!(
            r#"      <tr>
        <td>{name}</td>
        <td>{dob}</td>
        <td>{bio}</td>
        <td><a href="{path}">Show</a></td>
        <td><a href="{path}/edit">Edit</a></td>
        <td>{destroy}</td>
      </tr>
"#,
            name = opt_text(person.name.as_deref()),
            dob = dob_text(person),
            bio = opt_text(person.bio.as_deref()),
            destroy = destroy_button(&path),
        ));
    }

    let body = format!(
        r#"{notice}
<h1>{plural}</h1>

<table>
  <thead>
    <tr>
      <th>Name</th>
      <th>Dob</th>
      <th>Bio</th>
      <th colspan="3"></th>
    </tr>
  </thead>

  <tbody>
{rows}  </tbody>
</table>

<br>

<a href="{collection}/new">New {singular}</a>"#,
        notice = notice(notice_msg),
        plural = kind.plural(),
        collection = kind.collection_path(),
        singular = kind.singular(),
    );
    layout(kind.plural(), &body)
}

/// `GET /{people}/{id}`
pub fn show(kind: PersonKind, person: &Person, notice_msg: Option<&str>) -> String {
    let path = kind.member_path(person.id);
    let body = format!(
        r#"{notice}
<p>
  <strong>Name:</strong>
  {name}
</p>

<p>
  <strong>Dob:</strong>
  {dob}
</p>

<p>
  <strong>Bio:</strong>
  {bio}
</p>

<a href="{path}/edit">Edit</a> |
<a href="{collection}">Back</a>"#,
        notice = notice(notice_msg),
        name = opt_text(person.name.as_deref()),
        dob = dob_text(person),
        bio = opt_text(person.bio.as_deref()),
        collection = kind.collection_path(),
    );
    layout(kind.singular(), &body)
}

/// `GET /{people}/new`, also re-rendered after a rejected create.
pub fn new_page(kind: PersonKind, form: &PersonForm, errors: &[FieldError]) -> String {
    let body = format!(
        r#"<h1>New {singular}</h1>

{form}

<a href="{collection}">Back</a>"#,
        singular = kind.singular(),
        form = person_form(
            kind,
            &kind.collection_path(),
            None,
            form,
            errors,
            &format!("Create {}", kind.singular()),
        ),
        collection = kind.collection_path(),
    );
    layout(&format!("New {}", kind.singular()), &body)
}

/// `GET /{people}/{id}/edit`, also re-rendered after a rejected update.
pub fn edit_page(kind: PersonKind, id: i64, form: &PersonForm, errors: &[FieldError]) -> String {
    let path = kind.member_path(id);
    let body = format!(
        r#"<h1>Editing {singular}</h1>

{form}

<a href="{path}">Show</a> |
<a href="{collection}">Back</a>"#,
        singular = kind.singular(),
        form = person_form(
            kind,
            &path,
            Some("patch"),
            form,
            errors,
            &format!("Update {}", kind.singular()),
        ),
        collection = kind.collection_path(),
    );
    layout(&format!("Editing {}", kind.singular()), &body)
}

fn error_explanation(kind: PersonKind, errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let noun = if errors.len() == 1 { "error" } else { "errors" };
    let items: String = errors
        .iter()
        .map(|e| format!("      <li>{}</li>\n", escape(&e.to_string())))
        .collect();
    format!(
        r#"  <div id="error_explanation">
    <h2>{count} {noun} prohibited this {key} from being saved:</h2>

    <ul>
{items}    </ul>
  </div>
"#,
        count = errors.len(),
        key = kind.param_key(),
    )
}

fn person_form(
    kind: PersonKind,
    action: &str,
    method_override: Option<&str>,
    form: &PersonForm,
    errors: &[FieldError],
    submit_label: &str,
) -> String {
    let key = kind.param_key();
    let hidden = method_override
        .map(|m| format!(r#"  <input type="hidden" name="_method" value="{m}">"#))
        .unwrap_or_default();

    format!(
        r#"<form method="post" action="{action}">
{hidden}
{errors}
  <div class="field">
    <label for="{key}_name">Name</label>
    <input type="text" name="name" id="{key}_name" value="{name}">
  </div>

  <div class="field">
    <label for="{key}_dob">Dob</label>
    <input type="date" name="dob" id="{key}_dob" value="{dob}">
  </div>

  <div class="field">
    <label for="{key}_bio">Bio</label>
    <textarea name="bio" id="{key}_bio">{bio}</textarea>
  </div>

  <div class="actions">
    <input type="submit" name="commit" value="{submit}">
  </div>
</form>"#,
        action = escape(action),
        errors = error_explanation(kind, errors),
        name = escape(&form.name),
        dob = escape(&form.dob),
        bio = escape(&form.bio),
        submit = escape(submit_label),
    )
}
