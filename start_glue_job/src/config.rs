use lambda_runtime::Error;

/// Environment variable holding the name of the Glue job to start.
pub(crate) const JOB_NAME_VAR: &str = "JOB_NAME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HandlerConfig {
    pub(crate) job_name: String,
}

impl HandlerConfig {
    pub(crate) fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let job_name = lookup(JOB_NAME_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| Error::from(format!("{JOB_NAME_VAR} must be configured")))?;
        Ok(Self { job_name })
    }
}
