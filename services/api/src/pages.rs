//! Server-rendered marketing pages.
//!
//! Pages are plain `Html<String>` bodies assembled from const markup and
//! small shell helpers — no template engine, keeping the dependency
//! footprint to the HTTP stack. The shared [`FORM_SCRIPT`] implements the
//! browser-side form contract: required/format checks with inline per-field
//! errors, a JSON POST to the intake endpoints, reset on success, and a
//! value-preserving error banner otherwise.

use skillforge::content::{courses, projects};

const SITE_HEAD_OPEN: &str = r##"<!DOCTYPE html>
<html lang="en"><head><meta charset="utf-8"/>
<meta name="viewport" content="width=device-width,initial-scale=1"/>
"##;

const SITE_CSS: &str = r##"<style>
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
body{background:#000;color:#fff;font-family:'Segoe UI',Arial,sans-serif;line-height:1.5}
a{color:#ff4d4d;text-decoration:none}
.nav{display:flex;gap:24px;align-items:center;padding:16px 32px;border-bottom:1px solid #333}
.nav .brand{color:#ff0000;font-weight:700;font-size:1.1rem}
.nav a.active{border-bottom:2px solid #ff0000}
.page{max-width:1100px;margin:0 auto;padding:32px 16px}
.hero h1{color:#ff0000;font-size:2.2rem;margin-bottom:8px}
.hero p{color:#ddd;margin-bottom:24px}
.card{background:#111;border:1px solid #333;border-radius:12px;padding:24px;margin-bottom:24px}
.card h2{color:#ff4d4d;margin-bottom:8px}
.card h3{margin-bottom:8px}
.chips{display:flex;flex-wrap:wrap;gap:8px;margin:12px 0}
.chips span{background:#2a2a2a;border-radius:16px;padding:4px 12px;font-size:.85rem}
.price .original{text-decoration:line-through;color:#888;margin-right:8px}
.price .current{color:#4caf50;font-weight:700}
.project-code{color:#888;font-size:.8rem;margin-top:8px}
form{display:flex;flex-direction:column;gap:12px;max-width:480px}
label{font-size:.9rem;color:#bbb}
input,select,textarea{width:100%;background:#000;color:#fff;border:1px solid #555;border-radius:6px;padding:10px}
textarea{min-height:90px}
button[type=submit]{background:#dc2626;color:#fff;border:1px solid #fff;border-radius:6px;padding:12px;cursor:pointer}
button[type=submit]:disabled{opacity:.6;cursor:wait}
.field-error{color:#ff6b6b;font-size:.8rem;min-height:1em}
.form-banner{border-radius:6px;padding:0}
.form-banner.success{background:#14351a;color:#7ee787;padding:10px}
.form-banner.error{background:#3a1414;color:#ff6b6b;padding:10px}
footer{border-top:1px solid #333;padding:24px 32px;color:#888;font-size:.85rem;text-align:center}
</style>
"##;

/// Browser-side contract for every `form[data-endpoint]`: validate, POST
/// JSON, reset on success, keep the entered values on failure.
const FORM_SCRIPT: &str = r##"<script>
(function(){
  var EMAIL=/^[^\s@]+@[^\s@]+\.[^\s@]+$/;
  function digits(v){return v.replace(/\D/g,'')}
  function setError(form,name,message){
    var slot=form.querySelector('.field-error[data-for="'+name+'"]');
    if(slot){slot.textContent=message}
  }
  function clearErrors(form){
    form.querySelectorAll('.field-error').forEach(function(slot){slot.textContent=''});
  }
  document.querySelectorAll('form[data-endpoint]').forEach(function(form){
    form.addEventListener('submit',function(ev){
      ev.preventDefault();
      clearErrors(form);
      var data={};
      form.querySelectorAll('input[name],select[name],textarea[name]').forEach(function(el){
        data[el.name]=el.value;
      });
      var ok=true;
      form.querySelectorAll('[data-required]').forEach(function(el){
        if(!el.value.trim()){setError(form,el.name,(el.dataset.label||el.name)+' is required');ok=false}
      });
      var email=form.querySelector('[data-check="email"]');
      if(email&&email.value.trim()&&!EMAIL.test(email.value)){setError(form,email.name,'Invalid email format');ok=false}
      var phone=form.querySelector('[data-check="phone"]');
      if(phone&&phone.value.trim()&&digits(phone.value).length!==10){setError(form,phone.name,'Phone number must be 10 digits');ok=false}
      var applying=form.querySelector('[name="applyingFor"]');
      var other=form.querySelector('[name="otherSpecification"]');
      if(applying&&other&&applying.value==='others'&&!other.value.trim()){
        setError(form,'otherSpecification','Program specification is required');ok=false;
      }
      if(!ok)return;
      var banner=form.querySelector('.form-banner');
      var button=form.querySelector('button[type="submit"]');
      button.disabled=true;
      button.textContent='Submitting...';
      fetch(form.dataset.endpoint,{
        method:'POST',
        headers:{'Content-Type':'application/json'},
        body:JSON.stringify(data)
      })
      .then(function(r){return r.json().then(function(body){return {ok:r.ok,body:body}})})
      .then(function(result){
        if(result.ok){
          banner.className='form-banner success';
          banner.textContent=result.body.message||'Submitted successfully';
          form.reset();
        }else{
          banner.className='form-banner error';
          banner.textContent=result.body.message||'Submission failed';
        }
      })
      .catch(function(){
        banner.className='form-banner error';
        banner.textContent='Network error. Please try again.';
      })
      .finally(function(){
        button.disabled=false;
        button.textContent=button.dataset.label;
      });
    });
  });
})();
</script>
"##;

fn page_shell(title: &str, active: &str, content: &str) -> String {
    let nav_item = |href: &str, id: &str, label: &str| -> String {
        let class = if active == id { " class=\"active\"" } else { "" };
        format!("<a href=\"{href}\"{class}>{label}</a>")
    };

    let mut html = String::with_capacity(16 * 1024);
    html.push_str(SITE_HEAD_OPEN);
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str(SITE_CSS);
    html.push_str("</head>\n<body>\n");
    html.push_str("<nav class=\"nav\"><span class=\"brand\">Summer Industrial Training Program</span>");
    html.push_str(&nav_item("/", "home", "Home"));
    html.push_str(&nav_item("/projects", "projects", "Projects"));
    html.push_str(&nav_item("/application-form", "apply", "Apply"));
    html.push_str("</nav>\n<div class=\"page\">\n");
    html.push_str(content);
    html.push_str("\n</div>\n<footer>Summer Industrial Training Program</footer>\n");
    html.push_str(FORM_SCRIPT);
    html.push_str("</body>\n</html>");
    html
}

fn text_field(name: &str, label: &str, kind: &str, extra: &str) -> String {
    format!(
        "<div><label for=\"{name}\">{label}</label>\
         <input type=\"{kind}\" id=\"{name}\" name=\"{name}\" placeholder=\"{label}\" \
         data-label=\"{label}\"{extra}/>\
         <p class=\"field-error\" data-for=\"{name}\"></p></div>"
    )
}

/// Landing page: hero copy, the contact/query form, and the course card.
pub(crate) fn home() -> String {
    let mut content = String::with_capacity(8 * 1024);

    content.push_str(
        "<section class=\"hero\">\
         <h1>Summer Industrial Training Program</h1>\
         <p>Research based industrial training for engineering students across India. \
         Build a real project, offline on campus or fully online.</p>\
         </section>",
    );

    content.push_str("<div class=\"card\"><h2>Contact Us</h2>");
    content.push_str("<form data-endpoint=\"/api/v1/queries\">");
    content.push_str(&text_field("fullName", "Full Name", "text", " data-required"));
    content.push_str(&text_field(
        "email",
        "Email Address",
        "email",
        " data-required data-check=\"email\"",
    ));
    content.push_str(&text_field(
        "phone",
        "Phone Number",
        "tel",
        " maxlength=\"10\" data-required data-check=\"phone\"",
    ));
    content.push_str(&text_field("college", "College Name", "text", " data-required"));
    content.push_str(
        "<div><label for=\"formType\">Program Mode</label>\
         <select id=\"formType\" name=\"formType\">\
         <option value=\"offline\">Offline</option>\
         <option value=\"online\">Online</option>\
         </select><p class=\"field-error\" data-for=\"formType\"></p></div>",
    );
    content.push_str(
        "<div><label for=\"query\">Your Query</label>\
         <textarea id=\"query\" name=\"query\" placeholder=\"Your Query\" \
         data-label=\"Query\" data-required></textarea>\
         <p class=\"field-error\" data-for=\"query\"></p></div>",
    );
    content.push_str("<div class=\"form-banner\"></div>");
    content.push_str(
        "<button type=\"submit\" data-label=\"Submit Query\">Submit Query</button>",
    );
    content.push_str("</form></div>");

    for highlight in courses::highlights() {
        content.push_str(&format!(
            "<div class=\"card\"><h3>{hook}: {title}</h3><p>{summary}</p><div class=\"chips\">",
            hook = highlight.hook,
            title = escape(highlight.title),
            summary = escape(highlight.summary),
        ));
        for topic in highlight.topics {
            content.push_str(&format!("<span>{}</span>", escape(topic)));
        }
        content.push_str("</div></div>");
    }

    page_shell("Summer Industrial Training Program", "home", &content)
}

/// Project showcase rendered from the static catalog.
pub(crate) fn projects() -> String {
    let mut content = String::with_capacity(8 * 1024);

    content.push_str(
        "<section class=\"hero\">\
         <h1>Unique Summer Projects</h1>\
         <p>Learn &amp; develop a level of project you will not find anywhere else.</p>\
         </section>",
    );

    for project in projects::showcase() {
        content.push_str(&format!(
            "<div class=\"card\">\
             <h2>{title}</h2>\
             <img src=\"{src}\" alt=\"{alt}\" width=\"{width}\" height=\"{height}\"/>\
             <p>{description}</p>\
             <div class=\"chips\">",
            title = escape(project.title),
            src = project.image.src,
            alt = escape(project.image.alt),
            width = project.image.width,
            height = project.image.height,
            description = escape(project.description),
        ));
        for topic in project.curriculum {
            content.push_str(&format!("<span>{}</span>", escape(topic)));
        }
        content.push_str(&format!(
            "</div>\
             <p class=\"price\"><span class=\"original\">Rs {original}</span>\
             <span class=\"current\">Rs {price}</span></p>\
             <a href=\"{link}\">Register Now</a>\
             <p class=\"project-code\">{code}</p>\
             </div>",
            original = project.original_price,
            price = project.price,
            link = project.register_link,
            code = project.project_code,
        ));
    }

    page_shell("Projects | Summer Industrial Training Program", "projects", &content)
}

/// Application form page.
pub(crate) fn application() -> String {
    let mut content = String::with_capacity(8 * 1024);

    content.push_str(
        "<section class=\"hero\">\
         <h1>Application Form</h1>\
         <p>Research based Summer Industrial Training Program application form.</p>\
         </section>",
    );

    content.push_str("<div class=\"card\">");
    content.push_str("<form data-endpoint=\"/api/v1/applications\">");
    content.push_str(&text_field("fullName", "Full Name", "text", " data-required"));
    content.push_str(&text_field(
        "emailAddress",
        "Email Address",
        "email",
        " data-required data-check=\"email\"",
    ));
    content.push_str(&text_field(
        "whatsappNo",
        "WhatsApp Number",
        "tel",
        " maxlength=\"10\" data-required data-check=\"phone\"",
    ));
    content.push_str(&text_field("collegeName", "College Name", "text", " data-required"));
    content.push_str(&text_field("branch", "Branch", "text", " data-required"));
    content.push_str(&text_field(
        "currentSemester",
        "Current Semester",
        "text",
        " data-required",
    ));
    content.push_str(
        "<div><label for=\"applyingFor\">Applying For</label>\
         <select id=\"applyingFor\" name=\"applyingFor\" data-label=\"Program choice\" data-required>\
         <option value=\"\">Select a program</option>\
         <option value=\"Develop Your Own Cloud\">Develop Your Own Cloud</option>\
         <option value=\"Next Generation DevOps With Cloud Computing\">Next Generation DevOps With Cloud Computing</option>\
         <option value=\"others\">Others</option>\
         </select><p class=\"field-error\" data-for=\"applyingFor\"></p></div>",
    );
    content.push_str(&text_field(
        "otherSpecification",
        "If others, specify the program",
        "text",
        "",
    ));
    content.push_str(&text_field(
        "tentativeDates",
        "Tentative Dates",
        "text",
        " data-required",
    ));
    content.push_str(
        "<div><label for=\"source\">How did you hear about us?</label>\
         <select id=\"source\" name=\"source\">\
         <option value=\"\">Select a source</option>\
         <option value=\"Instagram\">Instagram</option>\
         <option value=\"LinkedIn\">LinkedIn</option>\
         <option value=\"College\">College</option>\
         <option value=\"Friends\">Friends</option>\
         <option value=\"Other\">Other</option>\
         </select><p class=\"field-error\" data-for=\"source\"></p></div>",
    );
    content.push_str(
        "<div><label for=\"query\">Any questions for us?</label>\
         <textarea id=\"query\" name=\"query\" placeholder=\"Optional\"></textarea>\
         <p class=\"field-error\" data-for=\"query\"></p></div>",
    );
    content.push_str("<div class=\"form-banner\"></div>");
    content.push_str(
        "<button type=\"submit\" data-label=\"Submit Application\">Submit Application</button>",
    );
    content.push_str("</form></div>");

    page_shell(
        "Application Form | Summer Industrial Training Program",
        "apply",
        &content,
    )
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
