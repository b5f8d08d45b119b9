//! Container build file generator
//!
//! The Dockerfile is built as a list of instructions and rendered one per
//! line, so every port gets its own `EXPOSE`.

use crate::domain::entities::{Artifact, DeploymentSpec};
use crate::domain::ports::ArtifactGenerator;
use crate::error::ShipyardResult;

pub const DOCKERFILE: &str = "Dockerfile";

const WORKDIR: &str = "/app";

/// One Dockerfile instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Comment(String),
    From(String),
    Workdir(String),
    Copy { src: String, dest: String },
    Run(String),
    Expose(String),
    /// Exec form: `CMD ["a", "b"]`
    Cmd(Vec<String>),
}

impl Instruction {
    fn render(&self) -> String {
        match self {
            Instruction::Comment(text) => format!("# {}", text),
            Instruction::From(image) => format!("FROM {}", image),
            Instruction::Workdir(dir) => format!("WORKDIR {}", dir),
            Instruction::Copy { src, dest } => format!("COPY {} {}", src, dest),
            Instruction::Run(command) => format!("RUN {}", command),
            Instruction::Expose(port) => format!("EXPOSE {}", port),
            Instruction::Cmd(argv) => {
                let quoted: Vec<String> = argv
                    .iter()
                    .map(|a| serde_json::Value::from(a.as_str()).to_string())
                    .collect();
                format!("CMD [{}]", quoted.join(", "))
            }
        }
    }
}

/// Instructions for `spec`, in file order
pub fn instructions(spec: &DeploymentSpec) -> Vec<Instruction> {
    let language = spec.language();
    let mut out = vec![
        Instruction::From(spec.base_image().to_string()),
        Instruction::Workdir(WORKDIR.to_string()),
    ];

    if let (Some(manifest), Some(install)) =
        (language.dependency_manifest(), language.install_command())
    {
        out.push(Instruction::Copy {
            src: manifest.to_string(),
            dest: ".".to_string(),
        });
        out.push(Instruction::Comment("Install dependencies".to_string()));
        out.push(Instruction::Run(install.to_string()));
    }

    out.push(Instruction::Copy {
        src: ".".to_string(),
        dest: WORKDIR.to_string(),
    });

    out.extend(
        spec.port_values()
            .into_iter()
            .map(|p| Instruction::Expose(p.to_string())),
    );

    out.push(Instruction::Cmd(vec![
        language.interpreter().to_string(),
        spec.entry_point(),
    ]));
    out
}

pub fn render(spec: &DeploymentSpec) -> String {
    let mut text = String::new();
    for instruction in instructions(spec) {
        text.push_str(&instruction.render());
        text.push('\n');
    }
    text
}

/// Renders `Dockerfile`
#[derive(Debug, Clone, Copy, Default)]
pub struct DockerfileGenerator;

impl DockerfileGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactGenerator for DockerfileGenerator {
    fn name(&self) -> &'static str {
        "dockerfile"
    }

    fn generate(&self, spec: &DeploymentSpec) -> ShipyardResult<Vec<Artifact>> {
        Ok(vec![Artifact::new(DOCKERFILE, render(spec))])
    }
}
