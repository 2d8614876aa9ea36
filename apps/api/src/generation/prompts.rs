// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.
// Templates are filled with `fill_template`, never with chained `str::replace`.

/// Professional summary prompt.
/// Replace: {current_info}, {job_offer}, {language_instruction}, {no_fabrication}
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"You are an expert career coach and CV writer.

USER'S CURRENT INFO:
{current_info}

TARGET JOB OFFER / OBJECTIVE:
{job_offer}

TASK:
Write a professional, compelling and ATS-friendly professional summary (2-4 sentences) for this
user's CV, tailored specifically to the target job offer or objective. Highlight the skills and
experience from the current info that match the job requirements.

{no_fabrication}

LANGUAGE: {language_instruction}

Return ONLY the summary text: no heading, no quotes, no markdown."#;

/// Placeholder used when the user sends no current info.
pub const NO_CURRENT_INFO: &str = "(not provided)";

/// Full LaTeX CV prompt.
/// Replace: {language_instruction}, {omission_instruction}, {no_fabrication},
///          {template}, {user_data}
pub const CV_PROMPT_TEMPLATE: &str = r#"You are an expert CV writer, LaTeX developer and linguistic editor.

Your job is to generate a perfectly formatted, professional, ATS-friendly LaTeX CV.

---------------------------------------------
LATEX TEMPLATE:
{template}

USER DATA (JSON, to be cleaned and expanded):
{user_data}
---------------------------------------------

MANDATORY RULES:

1. **Fix Language & Grammar**
   - Correct all grammar, spelling and punctuation errors.
   - Rewrite poorly phrased content so it sounds professional and clear.
   - Expand shorthand ("proj", "int.", "uni") into full words.
   - Expand well-known abbreviations (institutions, degrees) when they can be inferred with confidence.
   - Keep tense, formatting and capitalization consistent.

2. **Professionalization & Detail Enhancement**
   - Make bullet points achievement-oriented, quantifying results where the data gives numbers.
   - Keep descriptions concise, factual and ATS-friendly.
   - Expand incomplete sentences into full, well-structured statements.
   - Expand very short entries (e.g. "web dev") into a complete phrase ("Web Developer specializing in ...")
     using only what the data states.

3. **Template Filling Instructions**
   - Replace every placeholder in the template with the cleaned and enhanced data.
   - For [EXPERIENCE_LIST] and [EDUCATION_LIST], use the \resumeSubheading and \resumeItem macros
     defined in the template.
   - For [PROJECTS_LIST], use \resumeItem{...} entries formatted as:
        \textbf{Project Name} $|$ \emph{Link/Tech} \\ Description.
   - For [SKILLS_LIST], produce a comma-separated list.
   - For [LANGUAGES_LIST], include each language with a proficiency label (e.g. English (Fluent)).
   - For [CERTIFICATIONS_LIST], use:
        \textbf{Name} -- Issuer (Year or Date)

4. **Missing Information**
   - If a field is missing or empty, omit the line gracefully but keep the document structure valid.
   - {omission_instruction}
   - {no_fabrication}

5. **LaTeX Safety**
   - Escape all LaTeX-sensitive characters in user content: &, %, $, #, _, {, }, ^, ~.
   - The final LaTeX must compile without errors.
   - Do not add packages unless absolutely necessary.

6. **Output Language**
   - {language_instruction}

7. **Output Format**
   - RETURN ONLY the final, complete LaTeX document.
   - Do NOT include markdown formatting, comments, explanations or code fences.
   - The response MUST start directly with \documentclass.

Generate the best possible CV using these rules."#;
