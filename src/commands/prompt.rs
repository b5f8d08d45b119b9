//! Interactive prompts for deployment values

use anyhow::Result;
use dialoguer::Input;
use shipyard::domain::value_objects::split_list;
use shipyard::Language;

use super::SpecValues;
use crate::cli::SpecArgs;

/// Ask for every value not already given as a flag
pub(crate) fn ask(values: &mut SpecValues, args: &SpecArgs) -> Result<()> {
    if args.app_name.is_none() {
        values.app_name = text("Enter the name of your application", &values.app_name)?;
    }
    if args.language.is_none() {
        let answer: String = Input::new()
            .with_prompt("Enter the language (python, bash, javascript)")
            .default(values.language.as_str().to_string())
            .validate_with(|input: &String| parse_language(input).map(|_| ()))
            .interact_text()?;
        values.language = parse_language(&answer).unwrap_or(values.language);
    }
    if args.ports.is_none() {
        let answer = text(
            "Enter the ports to expose (comma separated)",
            &values.ports.join(","),
        )?;
        values.ports = split_list(&answer);
    }
    if args.base_image.is_none() {
        values.base_image = text("Enter the base image for the Dockerfile", &values.base_image)?;
    }
    if args.metrics.is_none() {
        let answer = text(
            "Enter the metrics to collect (comma separated)",
            &values.metrics.join(","),
        )?;
        values.metrics = split_list(&answer);
    }
    Ok(())
}

/// Unknown answers are rejected so the prompt asks again
fn parse_language(answer: &str) -> Result<Language, String> {
    Language::parse(answer).ok_or_else(|| {
        let names: Vec<&str> = Language::ALL.iter().map(|l| l.as_str()).collect();
        format!("unknown language '{}' (valid: {})", answer.trim(), names.join(", "))
    })
}

fn text(prompt: &str, default: &str) -> Result<String> {
    let answer: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(answer)
}
