use crate::calendar::Tier;
use crate::models::{BucketPoint, CalendarResponse};

pub fn render_index(calendar: &CalendarResponse) -> String {
    let cells: String = calendar.buckets.iter().map(render_cell).collect();
    let legend: String = Tier::ALL
        .iter()
        .map(|tier| {
            format!(
                r#"<li><span class="swatch {}"></span>{}</li>"#,
                tier.css_class(),
                tier.label()
            )
        })
        .collect();
    let incidents: u64 = calendar
        .buckets
        .iter()
        .map(|bucket| u64::from(bucket.incidents))
        .sum();

    INDEX_HTML
        .replace("{{TIER_STYLES}}", &tier_styles())
        .replace("{{TODAY}}", &calendar.reference_date)
        .replace("{{DAYS}}", &calendar.days.to_string())
        .replace("{{AVERAGE}}", &calendar.average_uptime_display)
        .replace("{{INCIDENTS}}", &incidents.to_string())
        .replace("{{CELLS}}", &cells)
        .replace("{{LEGEND}}", &legend)
}

fn render_cell(bucket: &BucketPoint) -> String {
    format!(
        r#"<div class="cell {}" title="{}" data-date="{}"></div>"#,
        bucket.tier.css_class(),
        bucket.tooltip,
        bucket.date
    )
}

fn tier_styles() -> String {
    Tier::ALL
        .iter()
        .map(|tier| format!("    .{} {{ background: {}; }}\n", tier.css_class(), tier.color()))
        .collect()
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Uptime Calendar</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&display=swap');

    :root {
      --bg: #0f172a;
      --card: #111c33;
      --ink: #e2e8f0;
      --muted: #94a3b8;
      --shadow: 0 24px 60px rgba(2, 6, 23, 0.45);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.6rem, 3vw, 2.2rem);
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
    }

    .summary {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
    }

    .calendar {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(14px, 1fr));
      gap: 4px;
    }

    .cell {
      aspect-ratio: 1;
      border-radius: 3px;
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 14px;
      list-style: none;
      margin: 0;
      padding: 0;
      color: var(--muted);
      font-size: 0.85rem;
    }

    .swatch {
      display: inline-block;
      width: 12px;
      height: 12px;
      border-radius: 3px;
      margin-right: 6px;
      vertical-align: middle;
    }

{{TIER_STYLES}}  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Uptime Calendar</h1>
      <p class="subtitle">Last {{DAYS}} days through {{TODAY}}.</p>
    </header>
    <section class="summary">
      <div class="stat">
        <span class="label">Average uptime</span>
        <span class="value">{{AVERAGE}}%</span>
      </div>
      <div class="stat">
        <span class="label">Incidents</span>
        <span class="value">{{INCIDENTS}}</span>
      </div>
    </section>
    <section class="calendar" aria-label="Daily uptime">
{{CELLS}}
    </section>
    <ul class="legend">{{LEGEND}}</ul>
  </main>
</body>
</html>
"#;
