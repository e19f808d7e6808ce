mod charset;
mod validator;
