use crate::models::{CATEGORIES, Summary};

pub fn render_index(summary: &Summary) -> String {
    let options: String = CATEGORIES
        .iter()
        .map(|category| format!("<option value=\"{}\">{}</option>", category.id, category.name))
        .collect();
    let catalog = serde_json::to_string(&CATEGORIES).unwrap_or_else(|_| "[]".to_string());

    INDEX_HTML
        .replace("{{CONSUMED}}", &summary.consumed.to_string())
        .replace("{{BURNED}}", &summary.burned.to_string())
        .replace("{{NET}}", &summary.net.to_string())
        .replace("{{CATEGORY_OPTIONS}}", &options)
        .replace("{{CATEGORY_CATALOG}}", &catalog)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Calorie Tracker</title>
  <style>
    :root {
      --green: #65a30d;
      --green-dark: #4d7c0f;
      --ink: #1f2937;
      --ink-soft: #6b7280;
      --panel: #111827;
      --card: #ffffff;
      --danger: #ef4444;
      --line: #e5e7eb;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: #f8fafc;
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", Arial, sans-serif;
    }

    header {
      background: var(--green);
      padding: 14px 0;
    }

    .shell {
      width: min(880px, calc(100% - 40px));
      margin: 0 auto;
    }

    header .shell {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    header h1 {
      margin: 0;
      color: white;
      font-size: 1.15rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
    }

    .form-band {
      background: var(--green-dark);
      padding: 48px 0;
    }

    .card {
      background: var(--card);
      border-radius: 12px;
      box-shadow: 0 10px 30px rgba(17, 24, 39, 0.12);
      padding: 28px;
    }

    form .field {
      display: grid;
      gap: 8px;
      margin-bottom: 18px;
    }

    label {
      font-weight: 600;
      font-size: 0.95rem;
    }

    input[type="text"],
    input[type="number"],
    select {
      border: 1px solid var(--line);
      border-radius: 8px;
      padding: 10px 12px;
      font-size: 1rem;
      background: white;
      width: 100%;
    }

    button {
      border: none;
      border-radius: 8px;
      padding: 10px 16px;
      font-size: 0.95rem;
      font-weight: 700;
      text-transform: uppercase;
      cursor: pointer;
      transition: opacity 120ms ease, background 120ms ease;
    }

    button:disabled {
      opacity: 0.25;
      cursor: not-allowed;
    }

    #submit-btn {
      width: 100%;
      background: var(--panel);
      color: white;
    }

    #submit-btn:not(:disabled):hover {
      background: #020617;
    }

    #restart-btn {
      background: var(--panel);
      color: white;
      font-size: 0.8rem;
    }

    .summary-band {
      background: var(--panel);
      padding: 40px 0;
    }

    .summary-band h2 {
      margin: 0 0 24px;
      color: white;
      text-align: center;
      font-size: 1.8rem;
    }

    .tiles {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 20px;
      text-align: center;
    }

    .tile .figure {
      display: block;
      color: #fb923c;
      font-size: 3rem;
      font-weight: 800;
    }

    .tile .caption {
      color: white;
      font-weight: 600;
    }

    .list-section {
      padding: 40px 0 64px;
    }

    .list-section h2 {
      text-align: center;
      color: #475569;
      font-size: 1.8rem;
      margin: 0 0 8px;
    }

    #empty-note {
      text-align: center;
      color: var(--ink-soft);
      margin-top: 28px;
    }

    .activity {
      background: var(--card);
      border-radius: 10px;
      box-shadow: 0 6px 18px rgba(17, 24, 39, 0.08);
      margin-top: 20px;
      padding: 18px 22px;
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .activity .details {
      display: grid;
      gap: 6px;
    }

    .badge {
      justify-self: start;
      color: white;
      font-size: 0.75rem;
      font-weight: 700;
      text-transform: uppercase;
      padding: 4px 12px;
      border-radius: 999px;
      background: #94a3b8;
    }

    .badge.food {
      background: var(--green);
    }

    .badge.exercise {
      background: var(--danger);
    }

    .activity .name {
      font-size: 1.3rem;
      font-weight: 700;
    }

    .activity .calories {
      color: var(--green);
      font-size: 1.6rem;
      font-weight: 800;
    }

    .activity .calories span {
      font-size: 0.9rem;
      font-weight: 600;
      color: var(--ink-soft);
    }

    .row-actions {
      display: flex;
      gap: 10px;
    }

    .row-actions button {
      text-transform: none;
      font-weight: 600;
      padding: 8px 12px;
    }

    .edit-btn {
      background: #e2e8f0;
      color: var(--ink);
    }

    .delete-btn {
      background: var(--danger);
      color: white;
    }

    .status {
      min-height: 1.3em;
      margin-top: 14px;
      font-size: 0.9rem;
      color: var(--ink-soft);
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    .status[data-type="ok"] {
      color: var(--green-dark);
    }

    @media (max-width: 560px) {
      .activity {
        flex-direction: column;
        align-items: flex-start;
      }
    }
  </style>
</head>
<body>
  <header>
    <div class="shell">
      <h1>Calorie Tracker</h1>
      <button id="restart-btn" type="button" disabled>Reset app</button>
    </div>
  </header>

  <section class="form-band">
    <div class="shell">
      <form id="activity-form" class="card">
        <div class="field">
          <label for="category">Category</label>
          <select id="category">{{CATEGORY_OPTIONS}}</select>
        </div>
        <div class="field">
          <label for="name">Activity</label>
          <input id="name" type="text" placeholder="e.g. Orange juice, Salad, Weights, Cycling" autocomplete="off" />
        </div>
        <div class="field">
          <label for="calories">Calories</label>
          <input id="calories" type="number" min="0" step="1" placeholder="e.g. 300 or 500" />
        </div>
        <button id="submit-btn" type="submit" disabled>Save activity</button>
        <div class="status" id="status"></div>
      </form>
    </div>
  </section>

  <section class="summary-band">
    <div class="shell">
      <h2>Calorie summary</h2>
      <div class="tiles">
        <p class="tile"><span class="figure" id="consumed">{{CONSUMED}}</span><span class="caption">Consumed</span></p>
        <p class="tile"><span class="figure" id="burned">{{BURNED}}</span><span class="caption">Burned</span></p>
        <p class="tile"><span class="figure" id="net">{{NET}}</span><span class="caption">Net</span></p>
      </div>
    </div>
  </section>

  <section class="list-section">
    <div class="shell">
      <h2>Food &amp; exercise</h2>
      <p id="empty-note">No activities yet.</p>
      <div id="activity-list"></div>
    </div>
  </section>

  <script>
    const categories = {{CATEGORY_CATALOG}};
    const defaultCategory = categories.length ? categories[0].id : 1;

    const categorySelect = document.getElementById('category');
    const nameInput = document.getElementById('name');
    const caloriesInput = document.getElementById('calories');
    const submitBtn = document.getElementById('submit-btn');
    const restartBtn = document.getElementById('restart-btn');
    const formEl = document.getElementById('activity-form');
    const statusEl = document.getElementById('status');
    const listEl = document.getElementById('activity-list');
    const emptyNote = document.getElementById('empty-note');
    const consumedEl = document.getElementById('consumed');
    const burnedEl = document.getElementById('burned');
    const netEl = document.getElementById('net');

    let tracker = { activities: [], active_id: null, summary: { consumed: 0, burned: 0, net: 0 } };
    let draft = blankDraft();

    function blankDraft() {
      return { id: '', category: defaultCategory, name: '', calories: 0 };
    }

    function categoryName(id) {
      const match = categories.find((category) => category.id === id);
      return match ? match.name : '';
    }

    function setStatus(message, type) {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    }

    function applyState(data) {
      tracker = data;
      renderSummary();
      renderList();
      syncDraft();
    }

    function renderSummary() {
      consumedEl.textContent = tracker.summary.consumed;
      burnedEl.textContent = tracker.summary.burned;
      netEl.textContent = tracker.summary.net;
    }

    function renderList() {
      listEl.replaceChildren();
      emptyNote.hidden = tracker.activities.length > 0;

      tracker.activities.forEach((activity) => {
        const row = document.createElement('div');
        row.className = 'activity';

        const details = document.createElement('div');
        details.className = 'details';

        const badge = document.createElement('span');
        const label = categoryName(activity.category);
        badge.className = 'badge'
          + (label === 'Food' ? ' food' : '')
          + (label === 'Exercise' ? ' exercise' : '');
        badge.textContent = label;

        const name = document.createElement('span');
        name.className = 'name';
        name.textContent = activity.name;

        const calories = document.createElement('span');
        calories.className = 'calories';
        calories.textContent = activity.calories + ' ';
        const unit = document.createElement('span');
        unit.textContent = 'calories';
        calories.appendChild(unit);

        details.append(badge, name, calories);

        const actions = document.createElement('div');
        actions.className = 'row-actions';

        const editBtn = document.createElement('button');
        editBtn.type = 'button';
        editBtn.className = 'edit-btn';
        editBtn.textContent = 'Edit';
        editBtn.addEventListener('click', () => selectActivity(activity.id));

        const deleteBtn = document.createElement('button');
        deleteBtn.type = 'button';
        deleteBtn.className = 'delete-btn';
        deleteBtn.textContent = 'Delete';
        deleteBtn.addEventListener('click', () => deleteActivity(activity.id));

        actions.append(editBtn, deleteBtn);
        row.append(details, actions);
        listEl.appendChild(row);
      });
    }

    function syncDraft() {
      const active = tracker.active_id
        ? tracker.activities.find((activity) => activity.id === tracker.active_id)
        : null;
      draft = active ? { ...active } : blankDraft();
      writeForm();
    }

    function writeForm() {
      categorySelect.value = String(draft.category);
      nameInput.value = draft.name;
      caloriesInput.value = draft.calories > 0 ? String(draft.calories) : '';
      submitBtn.textContent = draft.id ? 'Update activity' : 'Save activity';
      updateControls();
    }

    function updateControls() {
      const valid = nameInput.value.trim() !== '' && Number(caloriesInput.value) > 0;
      submitBtn.disabled = !valid;
      restartBtn.disabled = tracker.activities.length === 0;
    }

    async function request(path, options) {
      const res = await fetch(path, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    }

    async function submitDraft() {
      setStatus('Saving...', '');
      const body = {
        id: draft.id,
        category: Number(categorySelect.value),
        name: nameInput.value,
        calories: Number(caloriesInput.value)
      };
      const data = await request('/api/activities', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      applyState(data);
      setStatus('Saved', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    }

    async function selectActivity(id) {
      const data = await request(`/api/activities/${encodeURIComponent(id)}/select`, { method: 'POST' });
      applyState(data);
    }

    async function deleteActivity(id) {
      const data = await request(`/api/activities/${encodeURIComponent(id)}`, { method: 'DELETE' });
      applyState(data);
    }

    async function restartApp() {
      const data = await request('/api/restart', { method: 'POST' });
      applyState(data);
      setStatus('All activities cleared', 'ok');
      setTimeout(() => setStatus('', ''), 1200);
    }

    formEl.addEventListener('submit', (event) => {
      event.preventDefault();
      submitDraft().catch((err) => setStatus(err.message, 'error'));
    });

    nameInput.addEventListener('input', updateControls);
    caloriesInput.addEventListener('input', updateControls);
    restartBtn.addEventListener('click', () => {
      restartApp().catch((err) => setStatus(err.message, 'error'));
    });

    request('/api/state')
      .then(applyState)
      .catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
