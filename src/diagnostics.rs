//! Markdown dumps handed to a [`Log`](crate::log::Log). Purely informational.

use crate::{
    data::{FetchRequest, Response},
    sequence::Sequence,
    templater::Variables,
};
use std::fmt::{self, Write};

const NOT_AVAILABLE: &str = "(n/a)";

pub fn fetch_dump(request: &FetchRequest, response: &Response) -> String {
    let mut dump = String::new();
    // writing into a String can't fail
    let _ = write_fetch_dump(&mut dump, request, response);
    dump
}

pub fn sequence_dump(sequence: &Sequence) -> String {
    let mut dump = String::new();
    let _ = write_sequence_dump(&mut dump, sequence);
    dump
}

fn write_fetch_dump(
    dump: &mut String,
    request: &FetchRequest,
    response: &Response,
) -> fmt::Result {
    write!(dump, "# Http state dump\r\n\r\n")?;
    write!(
        dump,
        "## Url\r\n\r\n{} {}\r\n\r\n",
        request.method(),
        request.url
    )?;

    write!(dump, "## Query params\r\n\r\n")?;
    match &request.query {
        Some(query) if !query.is_empty() => {
            for (key, value) in query {
                write!(dump, "{}={}\r\n", key, value)?;
            }
            write!(dump, "\r\n")?;
        }
        _ => write!(dump, "{}\r\n\r\n", NOT_AVAILABLE)?,
    }

    write!(dump, "## Post body\r\n\r\n")?;
    write_block(dump, request.body.as_deref())?;

    write!(dump, "## Response\r\n\r\n```\r\n")?;
    for line in &response.raw_header_lines {
        write!(dump, "{}\r\n", line)?;
    }
    write!(dump, "\r\n{}\r\n```\r\n\r\n", response.body)?;

    if let Some(error) = &response.error {
        write!(dump, "## Transport error\r\n\r\n{}\r\n\r\n", error)?;
    }

    Ok(())
}

fn write_sequence_dump(dump: &mut String, sequence: &Sequence) -> fmt::Result {
    let templater = sequence.templater();

    write!(dump, "# AutoHttp state dump\r\n\r\n")?;
    write!(dump, "## Initial variables\r\n\r\n")?;
    write_variables(dump, sequence.initial_variables())?;
    write!(dump, "## Final variables\r\n\r\n")?;
    write_variables(dump, sequence.variables())?;

    for (index, page) in sequence.pages().iter().enumerate() {
        write!(
            dump,
            "## Page {}: {}\r\n\r\n",
            index + 1,
            templater.substitute(page.url())
        )?;

        if let Some(body) = page.body() {
            write!(dump, "### Post body\r\n\r\n")?;
            write_block(dump, Some(templater.substitute(body).as_str()))?;
        }

        let response = page.last_response();

        write!(dump, "### Response headers\r\n\r\n")?;
        write_block(
            dump,
            response
                .filter(|response| !response.raw_header_lines.is_empty())
                .map(|response| response.raw_header_lines.join("\r\n"))
                .as_deref(),
        )?;

        write!(dump, "### Response body\r\n\r\n")?;
        write_block(
            dump,
            response
                .map(|response| response.body.as_str())
                .filter(|body| !body.is_empty()),
        )?;
    }

    Ok(())
}

fn write_variables(dump: &mut String, variables: &Variables) -> fmt::Result {
    write!(dump, "| Name | Value |\r\n|---|---|\r\n")?;
    for (name, value) in variables.iter() {
        write!(dump, "| {} | {} |\r\n", name, value)?;
    }
    write!(dump, "\r\n")
}

fn write_block(dump: &mut String, content: Option<&str>) -> fmt::Result {
    match content {
        Some(content) => write!(dump, "```\r\n{}\r\n```\r\n\r\n", content),
        None => write!(dump, "{}\r\n\r\n", NOT_AVAILABLE),
    }
}
