//! Trimmed-down copies of upstream markup shared by the extractor and
//! assembler tests.

pub(crate) const RUN_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>run | English meaning</title></head>
<body>
<div class="entry-body">
  <div class="pr entry-body__el" data-source="cald4">
    <div class="pos-header dpos-h">
      <div class="di-title"><span class="headword hw dhw">run</span></div>
      <div class="posgram dpos-g"><span class="pos dpos" title="A word that describes an action">verb</span></div>
      <span class="uk dpron-i">
        <span class="region dreg">uk</span>
        <span class="daud">
          <audio class="hdn"><source type="audio/mpeg" src="/media/english/uk_pron/u/ukr/ukrun/ukrun__025.mp3"></audio>
        </span>
        <span class="pron dpron">/<span class="ipa dipa">rʌn</span>/</span>
      </span>
      <span class="us dpron-i">
        <span class="region dreg">us</span>
        <span class="pron dpron">/<span class="ipa dipa">rʌn</span>/</span>
      </span>
      <span class="us dpron-i">
        <span class="region dreg">us</span>
        <span class="pron dpron">&nbsp;</span>
      </span>
    </div>
    <div class="pos-body">
      <div class="def-block ddef_block">
        <div class="ddef_h">
          <div class="def ddef_d db">to move along, faster than <a href="/walk">walking</a>, by taking quick steps</div>
        </div>
        <div class="def-body ddef_b">
          <div class="examp dexamp"><span class="eg deg">I can run&nbsp;fast.</span></div>
        </div>
        <div class="daccord">
          <ul><li class="eg dexamp">I can   run fast.</li></ul>
        </div>
      </div>
      <div class="def-block ddef_block">
        <div class="ddef_h"><div class="def ddef_d db">to be in charge of a business</div></div>
        <div class="def-body ddef_b">
          <div class="examp dexamp"><span class="eg deg">She runs a small hotel.</span></div>
        </div>
      </div>
    </div>
  </div>
</div>
</body></html>"#;

pub(crate) const MULTI_ENTRY_PAGE: &str = r#"<html><body>
<div class="entry-body">
  <div class="pr entry-body__el">
    <span class="top" id="cald4-1"></span>
    <div class="pos-header">
      <span class="headword">walk</span>
      <div class="posgram"><span class="pos">noun</span></div>
    </div>
    <div class="def-block">
      <div class="def">a journey on foot</div>
      <div class="examp">a long walk</div>
      <div class="examp">We went for a <b>walk</b>.</div>
      <div class="daccord"><ul>
        <li>a long walk</li>
        <li>a walk in the park</li>
      </ul></div>
    </div>
    <div class="def-block">
      <div class="def">  </div>
      <div class="examp">orphaned example</div>
    </div>
  </div>
  <div class="pr entry-body__el">
    <div class="pos-header">
      <span class="headword">walk</span>
      <span class="pos">verb</span>
    </div>
    <div class="def-block">
      <div class="def">to move along by putting one foot in front of the other</div>
    </div>
  </div>
  <div class="pr entry-body__el">
    <div class="pos-header"><span class="pos">noun</span></div>
  </div>
</div>
</body></html>"#;

pub(crate) const EMPTY_HEADWORD_PAGE: &str = r#"<html><body>
<div class="pr entry-body__el">
  <div class="pos-header"><span class="headword">  </span><span class="pos">verb</span></div>
  <div class="def-block"><div class="def">something</div></div>
</div>
</body></html>"#;

pub(crate) const INFLECTION_PAGE: &str = "<html><body>
<table class=\"inflection-table\"><tbody>
<tr>
<td><p>Present participle
running</p></td>
<td><p>Past tense<br>ran</p></td>
</tr>
<tr>
<td>no paragraph here</td>
<td><p>only one line</p></td>
</tr>
</tbody></table>
</body></html>";

pub(crate) const INFLECTION_MARKUP_PAGE: &str = r#"<html><body>
<table class="other-table"><tr><td><p>Ignored<br>cell</p></td></tr></table>
<table class="inflection-table"><tbody><tr>
<td><p><b>Plain form</b><br/><i>run</i></p></td>
<td><p>Third-person singular<BR>runs</p></td>
<td><p><br>orphan</p></td>
<td><p>Past participle<br /><a href="/wiki/run">run</a></p></td>
</tr></tbody></table>
</body></html>"#;
