//! Single-page UI served at `/`.

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>HealSumm</title>
<style>
  body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 1100px; color: #1f2933; }
  h1 { margin-bottom: 0.2rem; }
  .muted { color: #616e7c; }
  section { margin-top: 1.5rem; }
  textarea { width: 100%; min-height: 10rem; font: inherit; padding: 0.5rem; box-sizing: border-box; }
  button { padding: 0.5rem 1rem; margin-right: 0.5rem; cursor: pointer; }
  pre { white-space: pre-wrap; background: #f5f7fa; padding: 1rem; border-radius: 4px; }
  table { border-collapse: collapse; width: 100%; font-size: 0.9rem; }
  th, td { border: 1px solid #cbd2d9; padding: 0.35rem 0.5rem; text-align: left; }
  th { background: #f5f7fa; }
  .tag { padding: 0.1rem 0.45rem; border-radius: 3px; font-weight: 600; }
  .tag.low { background: #e3f9e5; color: #207227; }
  .tag.med { background: #fffbea; color: #8d2b0b; }
  .tag.hi { background: #ffe3e3; color: #a61b1b; }
  .error { color: #a61b1b; }
</style>
</head>
<body>
<h1>HealSumm</h1>
<p class="muted">Quality-gated summaries of health articles with readability, entity and numeric checks.</p>

<section>
  <h2>Summarize an article</h2>
  <textarea id="article" placeholder="Paste a health or medical article (30 words or more)"></textarea>
  <textarea id="reference" placeholder="Optional reference summary" style="min-height: 4rem"></textarea>
  <p>
    <button id="summarize">Summarize</button>
    <span id="summarize-status" class="muted"></span>
  </p>
  <pre id="summary" hidden></pre>
</section>

<section>
  <h2>Batch</h2>
  <p>
    <button id="batch">Run batch</button>
    <button id="refresh">Load results</button>
    <span id="batch-status" class="muted"></span>
  </p>
  <table>
    <thead>
      <tr>
        <th>Article</th><th>Words</th><th>Target</th><th>Retries</th><th>FKGL</th>
        <th>Coverage</th><th>Missing numbers</th><th>Hallucination</th><th>Risk</th><th>Escalate</th>
      </tr>
    </thead>
    <tbody id="results"></tbody>
  </table>
</section>

<script>
const riskClass = { Low: "low", Medium: "med", High: "hi" };

function cell(value) {
  const td = document.createElement("td");
  td.textContent = value;
  return td;
}

function renderRows(records) {
  const body = document.getElementById("results");
  body.replaceChildren();
  for (const r of records) {
    const tr = document.createElement("tr");
    tr.append(
      cell(r.article_id), cell(r.word_count), cell(r.target_range), cell(r.retries),
      cell(r.fkgl), cell(r.entity_coverage), cell(r.missing_numbers ? "yes" : "no"),
      cell(r.hallucination_flag ? r.hallucinated_entities.join(", ") : "no"),
    );
    const risk = cell("");
    const tag = document.createElement("span");
    tag.className = "tag " + (riskClass[r.risk_level] || "");
    tag.textContent = r.risk_level;
    risk.append(tag);
    tr.append(risk, cell(r.escalate ? "yes" : "no"));
    body.append(tr);
  }
}

async function call(path, options) {
  const res = await fetch(path, options);
  const data = await res.json();
  if (!res.ok) throw new Error(data.error || res.statusText);
  return data;
}

function setStatus(id, text, isError) {
  const el = document.getElementById(id);
  el.textContent = text;
  el.className = isError ? "error" : "muted";
}

document.getElementById("summarize").addEventListener("click", async () => {
  const text = document.getElementById("article").value;
  const reference = document.getElementById("reference").value;
  const out = document.getElementById("summary");
  setStatus("summarize-status", "Summarizing...", false);
  try {
    const r = await call("/api/summarize", {
      method: "POST",
      headers: { "Content-Type": "application/json" },
      body: JSON.stringify(reference.trim() ? { text, reference } : { text }),
    });
    out.textContent = r.summary + "\n\n" +
      `words ${r.word_count} (target ${r.target_range}), retries ${r.retries}, ` +
      `FKGL ${r.fkgl}, FRE ${r.fre}, coverage ${r.entity_coverage}, ` +
      `risk ${r.risk_level}${r.escalate ? " (escalate)" : ""}`;
    out.hidden = false;
    setStatus("summarize-status", "", false);
  } catch (e) {
    out.hidden = true;
    setStatus("summarize-status", e.message, true);
  }
});

document.getElementById("batch").addEventListener("click", async () => {
  setStatus("batch-status", "Processing articles...", false);
  try {
    const r = await call("/api/batch", { method: "POST" });
    renderRows(r.records);
    setStatus("batch-status", `${r.count} processed, ${r.skipped.length} skipped`, false);
  } catch (e) {
    setStatus("batch-status", e.message, true);
  }
});

document.getElementById("refresh").addEventListener("click", async () => {
  try {
    const records = await call("/api/results");
    renderRows(records);
    setStatus("batch-status", `${records.length} stored results`, false);
  } catch (e) {
    setStatus("batch-status", e.message, true);
  }
});
</script>
</body>
</html>
"#;
