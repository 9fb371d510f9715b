// Shared prompt constants for screening LLM calls.
// Modules that build their own request parts pull the fragments from here.

/// The analysis instruction sent ahead of every job-description/resume pair.
pub const ANALYSIS_PROMPT: &str = "\
    As an expert technical recruiter and career coach, your task is to analyze \
    the provided candidate's resume against the specific job description. \
    The job description and resume are provided as files or text. Please extract \
    their content and perform the analysis.\n\n\
    Your analysis must be based *only* on the information given. \
    Evaluate the resume for skills, experience, qualifications, and certifications \
    against the job description. \
    Generate a relevance score, identify missing skills and certifications, and \
    provide constructive feedback.\n\n\
    Return the analysis in a structured JSON format.";

/// Label preceding an attached job-description file part.
pub const JOB_DESCRIPTION_FILE_LABEL: &str = "The Job Description is in the attached file:";

/// Label preceding an attached resume file part.
pub const RESUME_FILE_LABEL: &str = "The Candidate's Resume is in the attached file:";

/// Wraps inline job-description text in a delimited block.
pub fn job_description_block(text: &str) -> String {
    format!("Job Description:\n---\n{text}\n---")
}

/// Wraps inline resume text in a delimited block.
pub fn resume_block(text: &str) -> String {
    format!("Candidate's Resume:\n---\n{text}\n---")
}
