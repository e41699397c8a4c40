//! A trimmed copy of a company page, enough markup for every section parser.

pub(crate) const COMPANY_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <title>Kotak Mahindra Bank Ltd share price</title>
  <style>
    tr[data-row-company-id="1818"] { font-weight: 500; }
  </style>
</head>
<body>
<div class="bg-base sticky company-nav">
  <div class="flex flex-space-between container hide-from-tablet-landscape">
    <h1 class="h2 shrink-text" style="margin: 0.5em 0">Kotak Mahindra Bank Ltd</h1>
  </div>
  <div class="sub-nav-holder">
    <div class="sub-nav">
      <a href="#top">Summary</a>
      <a href="#chart">Chart</a>
      <a href="#analysis">Analysis</a>
      <a href="#peers">Peers</a>
      <a href="#quarters">Quarters</a>
      <a href="#profit-loss">Profit &amp; Loss</a>
      <a href="#balance-sheet">Balance Sheet</a>
      <a href="#cash-flow">Cash Flow</a>
      <a href="#ratios">Ratios</a>
      <a href="#shareholding">Investors</a>
      <a href="#documents">Documents</a>
      <a href="#segments">Segments</a>
      <a href="#">Top</a>
      <a href="/user/watchlist/">Watchlist</a>
    </div>
  </div>
</div>

<main>
<section id="top">
  <div class="company-profile">
    <div class="about"><p>Kotak Mahindra Bank offers  banking products.</p></div>
    <div class="sub commentary"><p>Key Points</p><p>Deposits grew <b>15%</b> YoY.</p></div>
  </div>
  <ul id="top-ratios">
    <li><span class="name">Market Cap</span><span class="nowrap value">₹ <span class="number">3,54,512</span> Cr.</span></li>
    <li><span class="name">Stock P/E</span><span class="nowrap value"><span class="number">19.2</span></span></li>
    <li><span class="name">Broken</span></li>
  </ul>
</section>

<section id="chart"><canvas></canvas></section>

<section id="analysis">
  <div class="pros"><p>PROS</p><ul><li>Company has a good return on equity.</li><li>Healthy dividend payout.</li></ul></div>
  <div class="cons"><p>CONS</p><ul><li>Stock is trading at 2.6 times its book value.</li></ul></div>
</section>

<section id="peers">
  <table class="data-table text-nowrap striped mark-visited no-scroll-right">
    <thead><tr><th>S.No.</th><th>Name</th><th>CMP Rs.</th><th>P/E</th></tr></thead>
    <tbody>
      <tr><td>1.</td><td>HDFC Bank</td><td>1805.95</td><td>19.86</td></tr>
      <tr><td></td><td></td><td></td><td></td></tr>
      <tr><td>2.</td><td>ICICI Bank</td><td>1335.40</td><td>19.17</td></tr>
    </tbody>
    <tfoot><tr><td></td><td>Median: 29 Co.</td><td>177.5</td><td>10.84</td></tr></tfoot>
  </table>
</section>

<section id="quarters">
  <table class="data-table responsive-text-nowrap">
    <thead><tr><th></th><th>Jun 2022</th><th>Sep 2022</th><th>Dec 2022</th><th>Mar 2023</th><th>Jun 2023</th><th>Sep 2023</th><th>Dec 2023</th><th>Mar 2024</th></tr></thead>
    <tbody>
      <tr><td class="text"><button class="button-plain" onclick="Company.showSchedule('Revenue', 'quarters', this)">Revenue&nbsp;<span class="blue-icon">+</span></button></td><td>100</td><td>100</td><td>100</td><td>100</td><td>110</td><td>120</td><td>130</td><td>140</td></tr>
      <tr><td class="text">Net Profit&nbsp;<span>+</span></td><td>10</td><td>10</td><td>10</td><td>10</td><td>15</td><td>15</td><td>15</td><td>15</td></tr>
    </tbody>
  </table>
</section>

<section id="profit-loss">
  <div data-result-table>
  <table class="data-table responsive-text-nowrap">
    <thead><tr><th></th><th>Mar 2019</th><th>Mar 2020</th><th>Mar 2021</th><th>Mar 2022</th><th>Mar 2023</th><th>Mar 2024</th><th>TTM</th></tr></thead>
    <tbody>
      <tr class="stripe"><td class="text"><button class="button-plain" onclick="Company.showSchedule('Revenue', 'profit-loss', this)">Revenue&nbsp;<span class="blue-icon">+</span></button></td><td>1,000</td><td>1,100</td><td>1,210</td><td>1,331</td><td>1,464.1</td><td>1,610.51</td><td>1,700</td></tr>
      <tr><td class="text">Financing Margin %</td><td>41%</td><td>43%</td><td>44%</td><td>40%</td><td>42%</td><td></td><td>-</td></tr>
      <tr><td class="text">Net Profit&nbsp;<span>+</span></td><td>100</td><td>120</td><td>150</td><td>180</td><td>200</td><td>243</td><td>260</td></tr>
    </tbody>
  </table>
  </div>
  <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 2%">
    <table class="ranges-table">
      <tbody>
        <tr><th colspan="2">Compounded Sales Growth</th></tr>
        <tr><td>10 Years:</td><td>17%</td></tr>
        <tr><td>5 Years:</td><td>14%</td></tr>
        <tr><td>TTM:</td><td>21%</td></tr>
      </tbody>
    </table>
    <table class="ranges-table">
      <tbody>
        <tr><th colspan="2">Return on Equity</th></tr>
        <tr><td>10 Years:</td><td>13%</td></tr>
        <tr><td>Last Year:</td><td>15%</td></tr>
        <tr><td>ignored</td></tr>
      </tbody>
    </table>
  </div>
</section>

<section id="balance-sheet">
  <table class="data-table responsive-text-nowrap">
    <thead><tr><th></th><th>Mar 2023</th><th>Mar 2024</th></tr></thead>
    <tbody>
      <tr><td class="text">Equity Capital</td><td>993</td><td>994</td></tr>
      <tr><td class="text">Deposits</td><td>3,61,273</td><td>4,44,139</td></tr>
    </tbody>
  </table>
</section>

<section id="cash-flow">
  <table class="data-table responsive-text-nowrap">
    <thead><tr><th></th><th>Mar 2022</th><th>Mar 2023</th><th>Mar 2024</th></tr></thead>
    <tbody>
      <tr><td class="text">Cash from Operating Activity&nbsp;<span>+</span></td><td>-5,012</td><td>2,800</td><td>10,400</td></tr>
      <tr><td class="text">Cash from Investing Activity&nbsp;<span>+</span></td><td>-1,200</td><td>-900</td><td>-1,500</td></tr>
      <tr><td class="text">Net Cash Flow</td><td>-6,212</td><td>1,900</td><td>8,900</td></tr>
    </tbody>
  </table>
</section>

<section id="ratios">
  <table class="data-table responsive-text-nowrap">
    <thead><tr><th></th><th>Mar 2023</th><th>Mar 2024</th></tr></thead>
    <tbody><tr><td class="text">ROE %</td><td>14%</td><td>15%</td></tr></tbody>
  </table>
</section>

<section id="shareholding">
  <table class="data-table">
    <thead><tr><th></th><th>Dec 2023</th><th>Mar 2024</th></tr></thead>
    <tbody>
      <tr><td class="text">Promoters&nbsp;<span>+</span></td><td>25.90%</td><td>25.89%</td></tr>
      <tr><td class="text">FIIs&nbsp;<span>+</span></td><td>37.41%</td><td>33.02%</td></tr>
    </tbody>
  </table>
</section>

<section id="documents">
  <h2>Documents</h2>
  <div><h3>Announcements</h3><ul><li><a href="/a.pdf">Board Meeting Outcome</a></li></ul></div>
</section>
</main>
</body>
</html>
"##;

pub(crate) const COMMENTARY: &str = r#"<div class="commentary">
  <div class="strong upper letter-spacing">About</div>
  <div class="sub">Kotak Mahindra Bank provides <b>banking</b> services.</div>
  <div class="strong upper letter-spacing">Key Points</div>
  <p>unrelated paragraph</p>
  <div class="sub"><p>Loan book grew 18%.</p><p>CASA ratio at 45%.</p></div>
  <div class="strong upper letter-spacing">Empty Heading</div>
</div>"#;
