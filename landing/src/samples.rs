//! Code samples shown in the quick-start block.
//!
//! The set of languages is closed: every sample is a literal template for the
//! same `integrate-razorpay` request, with placeholder credentials.

/// Endpoint every sample calls.
pub const ENDPOINT: &str = "https://synlink.onrender.com/integrate-razorpay";

const CURL_SAMPLE: &str = r#"curl -X POST https://synlink.onrender.com/integrate-razorpay \
-H "Content-Type: application/json" \
-d '{
  "api_key": "YOUR_RAZORPAY_KEY_ID",
  "secret_key": "YOUR_RAZORPAY_KEY_SECRET",
  "amount": "500",
  "phone": "1234567890"
}'"#;

const PYTHON_SAMPLE: &str = r#"import requests

response = requests.post(
    "https://synlink.onrender.com/integrate-razorpay",
    json={
        "api_key": "YOUR_RAZORPAY_KEY_ID",
        "secret_key": "YOUR_RAZORPAY_KEY_SECRET",
        "amount": "500",
        "phone": "1234567890",
    },
)
print(response.json())"#;

const NODE_SAMPLE: &str = r#"const response = await fetch("https://synlink.onrender.com/integrate-razorpay", {
  method: "POST",
  headers: { "Content-Type": "application/json" },
  body: JSON.stringify({
    api_key: "YOUR_RAZORPAY_KEY_ID",
    secret_key: "YOUR_RAZORPAY_KEY_SECRET",
    amount: "500",
    phone: "1234567890",
  }),
});

console.log(await response.json());"#;

const JAVA_SAMPLE: &str = r#"import java.net.URI;
import java.net.http.HttpClient;
import java.net.http.HttpRequest;
import java.net.http.HttpResponse;

public class IntegrateRazorpay {
    public static void main(String[] args) throws Exception {
        String payload = """
            {
              "api_key": "YOUR_RAZORPAY_KEY_ID",
              "secret_key": "YOUR_RAZORPAY_KEY_SECRET",
              "amount": "500",
              "phone": "1234567890"
            }
            """;

        HttpRequest request = HttpRequest.newBuilder()
            .uri(URI.create("https://synlink.onrender.com/integrate-razorpay"))
            .header("Content-Type", "application/json")
            .POST(HttpRequest.BodyPublishers.ofString(payload))
            .build();

        HttpResponse<String> response = HttpClient.newHttpClient()
            .send(request, HttpResponse.BodyHandlers.ofString());
        System.out.println(response.body());
    }
}"#;

/// Language of a quick-start sample. Selected through the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SampleLang {
    #[default]
    Curl,
    Python,
    Node,
    Java,
}

impl SampleLang {
    /// Tab order.
    pub const ALL: [SampleLang; 4] = [
        SampleLang::Curl,
        SampleLang::Python,
        SampleLang::Node,
        SampleLang::Java,
    ];

    /// Stable tab key.
    pub fn key(self) -> &'static str {
        match self {
            SampleLang::Curl => "curl",
            SampleLang::Python => "python",
            SampleLang::Node => "node",
            SampleLang::Java => "java",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SampleLang::Curl => "cURL",
            SampleLang::Python => "Python",
            SampleLang::Node => "Node.js",
            SampleLang::Java => "Java",
        }
    }

    /// Literal sample text, exactly as displayed and copied.
    pub fn code(self) -> &'static str {
        match self {
            SampleLang::Curl => CURL_SAMPLE,
            SampleLang::Python => PYTHON_SAMPLE,
            SampleLang::Node => NODE_SAMPLE,
            SampleLang::Java => JAVA_SAMPLE,
        }
    }
}
