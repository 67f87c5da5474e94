pub const BASE: &str = r#"
body {
    font-family: Arial, Helvetica, sans-serif;
    margin: 0;
    background-color: #ffffff;
}
"#;

pub const HEADER: &str = r#"
.gallery-header {
    overflow: hidden;
    background-color: #2196F3;
    width: 100%;
}

.gallery-header.sticky {
    position: fixed;
    top: 0;
    left: 0;
    z-index: 1;
    box-shadow: 0px 2px 4px rgba(0,0,0,0.4);
}

.gallery-header input[type=text] {
    float: left;
    padding: 6px;
    border: none;
    margin-top: 8px;
    margin-right: 8px;
    margin-left: 8px;
    font-size: 17px;
    width: 320px;
}

.gallery-header input[type=submit] {
    float: left;
    padding: 6px;
    border: none;
    margin-top: 8px;
    margin-right: 8px;
    font-size: 17px;
}

.gallery-header span {
    float: left;
    display: block;
    color: white;
    padding: 14px 16px;
    font-size: 17px;
}
"#;

pub const SUGGESTIONS: &str = r#"
.suggestions {
    background-color: #e9e9e9;
    padding: 8px 16px;
}

.suggestions h3 {
    margin: 8px 0px;
    font-size: 17px;
}

.suggestions ul {
    list-style-type: none;
    margin: 0;
    padding: 0;
}

.suggestions li {
    padding: 6px 8px;
    cursor: pointer;
}

.suggestions li:hover {
    background-color: #ddd;
}

.suggestions button {
    padding: 6px;
    border: none;
    margin-top: 8px;
    margin-right: 8px;
    font-size: 14px;
}
"#;

pub const PHOTO_GRID: &str = r#"
.photo-grid {
    display: grid;
    gap: 5px;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
}

.photo-tile {
    height: 300px;
    border: 5px solid #ffffff;
    display: flex;
    flex-direction: column;
}

.photo-tile img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    cursor: pointer;
}
"#;

pub const MODAL: &str = r#"
.modal {
    display: block;
    position: fixed;
    z-index: 1;
    left: 0;
    top: 0;
    width: 100%;
    height: 100%;
    overflow: auto;
    background-color: rgb(0,0,0);
    background-color: rgba(0,0,0,0.4);
}

.modal-content {
    background-color: #fefefe;
    margin: 5% auto;
    padding: 20px;
    border: 1px solid #888;
    width: fit-content;
}

.close {
    color: #aaa;
    float: right;
    font-size: 28px;
    font-weight: bold;
}

.close:hover,
.close:focus {
    color: black;
    text-decoration: none;
    cursor: pointer;
}

.modal-header {
    padding: 2px 16px;
    background-color: #2196F3;
    color: white;
}

.modal-media {
    display: grid;
    grid-gap: 5px;
    padding: 10px 0px 10px 0px;
    height: fit-content;
    width: fit-content;
}

.modal-media img {
    max-height: 70vh;
    max-width: 80vw;
    object-fit: contain;
}

.modal-info {
    padding: 10px 0px;
    color: black;
    font-size: 17px;
}

.modal-body {
    padding: 10px 0px;
    color: black;
    font-size: 17px;
}
"#;

pub const LOADING: &str = r#"
.loading {
    display: flex;
    justify-content: center;
    padding: 20px;
}

.loading-spinner {
    border: 6px solid #e9e9e9;
    border-top: 6px solid #2196F3;
    border-radius: 50%;
    width: 40px;
    height: 40px;
    animation: spin 1s linear infinite;
}

@keyframes spin {
    0% { transform: rotate(0deg); }
    100% { transform: rotate(360deg); }
}
"#;
