/// Build the user prompt asking the model for a script that satisfies `requirements`
pub fn build_prompt(requirements: &str) -> String {
    let requirements = requirements.trim();

    format!(r#"
You are a commandline script writer.
You are given a set of requirements for a script.
You need to write a script that satisfies the requirements.
You can choose to write the script in either Python, NodeJS, PHP or BASH.
The script will primarily be used on MacOS or Linux - please remember to account for the differences between the GNU tooling and BSD/Darwin tooling.
You need to return the filename, and the content of the script.

<user-requirements>
{requirements}
</user-requirements>
"#)
}
