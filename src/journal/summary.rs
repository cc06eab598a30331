use std::fmt::Write;

/// Weekly summary skeleton with a link to each of the week's sessions
pub(crate) fn render_weekly_summary(week: u32, sessions: &[String]) -> String {
    let mut out = format!(
        "# Week {week} Learning Summary

**Date Range**: [start date] - [end date]
**Learning Focus**: [main themes of the week]
**Sessions Completed**: {count}

## Overview
[Brief overview of what was accomplished this week]

## Sessions This Week
",
        count = sessions.len()
    );

    for session in sessions {
        let _ = writeln!(out, "- [{session}](../sessions/{session})");
    }

    out.push_str(SUMMARY_BODY);
    out
}

const SUMMARY_BODY: &str = "
## Key Accomplishments
- [Major milestone 1]
- [Major milestone 2]
- [Major milestone 3]

## Technical Skills Developed
- [Skill 1 with brief description]
- [Skill 2 with brief description]
- [Skill 3 with brief description]

## Code Artifacts Created
- [Files/systems implemented]
- [Tests written]
- [Documentation added]

## Challenges and Solutions
### Challenge 1: [Description]
**Solution**: [How it was resolved]
**Learning**: [What was learned]

### Challenge 2: [Description]
**Solution**: [How it was resolved]
**Learning**: [What was learned]

## Next Week Goals
- [ ] [Specific goal 1]
- [ ] [Specific goal 2]
- [ ] [Specific goal 3]

## Resources That Helped
- [Documentation pages]
- [Tutorial videos]
- [Community discussions]

## Notes for Future Reference
[Important gotchas, patterns, or insights to remember]
";
